//! Regenerate an aggregator file from its entries.
//!
//! The whole file is rebuilt on every change; nothing from the previous text
//! survives except what the parser recovered. Output is already laid out the
//! way `gofmt` would (tab indentation, aligned `=` columns), so the formatter
//! pass is normally a no-op.

use std::fmt::Write as _;

use crate::domain::{
    entry::{Entry, EntrySet},
    kind::AggregatorKind,
};

/// Render the complete aggregator text for `entries`.
///
/// Blocks appear in fixed order (imports, type aliases, constructor
/// bindings) and are omitted entirely when `entries` is empty. Same input,
/// same bytes.
pub fn render_aggregator(entries: &EntrySet, kind: AggregatorKind, import_root: &str) -> String {
    let mut sections = vec![format!("package {}\n", kind.package())];

    if !entries.is_empty() {
        sections.push(import_block(entries, import_root));
        sections.push(aligned_block(
            "type",
            entries.iter().map(|e| {
                let ident = alias_ident(e, kind);
                (ident.clone(), format!("{}.{}", e.name(), ident))
            }),
        ));
        sections.push(aligned_block(
            "var",
            entries.iter().map(|e| {
                let ident = binding_ident(e, kind);
                (ident.clone(), format!("{}.{}", e.name(), ident))
            }),
        ));
    }

    sections.join("\n")
}

/// `UserUsecase`
pub fn alias_ident(entry: &Entry, kind: AggregatorKind) -> String {
    format!("{}{}", entry.display_name(), kind.suffix())
}

/// `NewUserUsecase`
pub fn binding_ident(entry: &Entry, kind: AggregatorKind) -> String {
    format!("New{}{}", entry.display_name(), kind.suffix())
}

/// The exact constructor-binding line for `entry`, without indentation.
pub fn binding_line(entry: &Entry, kind: AggregatorKind) -> String {
    let ident = binding_ident(entry, kind);
    format!("{} = {}.{}", ident, entry.name(), ident)
}

fn import_block(entries: &EntrySet, import_root: &str) -> String {
    let mut out = String::from("import (\n");
    for entry in entries.iter() {
        let _ = writeln!(
            out,
            "\t\"{}/{}/{}\"",
            entry.module_path(),
            import_root,
            entry.name()
        );
    }
    out.push_str(")\n");
    out
}

fn aligned_block(keyword: &str, lines: impl Iterator<Item = (String, String)>) -> String {
    let lines: Vec<_> = lines.collect();
    let width = lines.iter().map(|(lhs, _)| lhs.len()).max().unwrap_or(0);

    let mut out = format!("{keyword} (\n");
    for (lhs, rhs) in &lines {
        let _ = writeln!(out, "\t{lhs:<width$} = {rhs}");
    }
    out.push_str(")\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::aggregator::parser::AggregatorParser;

    const MODULE: &str = "github.com/acme/shop";
    const ROOT: &str = "src/app/usecases";

    fn set(names: &[&str]) -> EntrySet {
        names.iter().map(|n| Entry::new(*n, MODULE)).collect()
    }

    #[test]
    fn renders_single_entry() {
        let text = render_aggregator(&set(&["user"]), AggregatorKind::Usecase, ROOT);
        assert_eq!(
            text,
            "package usecases\n\
             \n\
             import (\n\
             \t\"github.com/acme/shop/src/app/usecases/user\"\n\
             )\n\
             \n\
             type (\n\
             \tUserUsecase = user.UserUsecase\n\
             )\n\
             \n\
             var (\n\
             \tNewUserUsecase = user.NewUserUsecase\n\
             )\n"
        );
    }

    #[test]
    fn empty_set_has_no_blocks() {
        let text = render_aggregator(&EntrySet::new(), AggregatorKind::Repository, "x");
        assert_eq!(text, "package repositories\n");
    }

    #[test]
    fn entries_sorted_regardless_of_insertion_order() {
        let text = render_aggregator(&set(&["task", "blog", "user"]), AggregatorKind::Usecase, ROOT);
        let blog = text.find("NewBlogUsecase").unwrap();
        let task = text.find("NewTaskUsecase").unwrap();
        let user = text.find("NewUserUsecase").unwrap();
        assert!(blog < task && task < user);
    }

    #[test]
    fn equals_signs_are_aligned() {
        let text = render_aggregator(&set(&["user", "category"]), AggregatorKind::Repository, "r");
        assert!(text.contains("\tCategoryRepository = category.CategoryRepository\n"));
        assert!(text.contains("\tUserRepository     = user.UserRepository\n"));
        assert!(text.contains("\tNewUserRepository     = user.NewUserRepository\n"));
    }

    #[test]
    fn render_is_deterministic() {
        let a = render_aggregator(&set(&["user", "task"]), AggregatorKind::Handler, "h");
        let b = render_aggregator(&set(&["task", "user"]), AggregatorKind::Handler, "h");
        assert_eq!(a, b);
    }

    #[test]
    fn parser_recovers_everything_written() {
        for kind in AggregatorKind::ALL {
            let entries = set(&["blog", "order_item", "news", "newsletter", "user2"]);
            let text = render_aggregator(&entries, kind, ROOT);
            let parsed = AggregatorParser::new(kind, MODULE, ROOT).parse(&text);
            assert_eq!(parsed.entries(), entries, "kind {kind}");
            for entry in entries.iter() {
                assert!(parsed.is_complete(entry));
            }
        }
    }

    #[test]
    fn binding_line_shape() {
        let entry = Entry::new("task", MODULE);
        assert_eq!(
            binding_line(&entry, AggregatorKind::Usecase),
            "NewTaskUsecase = task.NewTaskUsecase"
        );
    }
}
