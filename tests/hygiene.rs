//! Hygiene: enforces coding standards at test time
//!
//! These tests scan the crate's `src/` tree for antipatterns. Each has a
//! budget. If you must add one, fix an existing one first. The budget never
//! grows.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

// Panics: these trap the WASM instance.
const MAX_UNWRAP: usize = 0;
const MAX_EXPECT: usize = 0;
const MAX_PANIC: usize = 0;
const MAX_UNREACHABLE: usize = 0;
const MAX_TODO: usize = 0;
const MAX_UNIMPLEMENTED: usize = 0;

// Silent loss: discards errors without inspecting.
// The one discard is the non-hydrate stub in `util/storage.rs`.
const MAX_SILENT_DISCARD: usize = 1;
// Optional browser lookups (storage, `data-theme`, node casts).
const MAX_DOT_OK: usize = 7;

// Style / structure.
const MAX_ALLOW_DEAD_CODE: usize = 0;

// Browser wiring must stay behind the feature gate.
const MAX_UNGATED_WEB_SYS_MODULES: usize = 0;

struct SourceFile {
    path: String,
    content: String,
}

/// Collect production `.rs` files from `src/`, excluding test files.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn count_in_source(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file
                .content
                .lines()
                .filter(|line| line.contains(pattern))
                .count();
            if count > 0 { Some((file.path.clone(), count)) } else { None }
        })
        .collect()
}

fn total(hits: &[(String, usize)]) -> usize {
    hits.iter().map(|(_, c)| c).sum()
}

fn format_hits(hits: &[(String, usize)]) -> String {
    hits.iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn assert_budget(pattern: &str, max: usize) {
    let files = source_files();
    let hits = count_in_source(&files, pattern);
    let count = total(&hits);
    assert!(count <= max, "{pattern} budget exceeded: found {count}, max {max}.\n{}", format_hits(&hits));
}

#[test]
fn source_tree_is_scanned() {
    assert!(source_files().iter().any(|f| f.path.ends_with("lib.rs")));
}

#[test]
fn unwrap_budget() {
    assert_budget(".unwrap()", MAX_UNWRAP);
}

#[test]
fn expect_budget() {
    assert_budget(".expect(", MAX_EXPECT);
}

#[test]
fn panic_budget() {
    assert_budget("panic!(", MAX_PANIC);
}

#[test]
fn unreachable_budget() {
    assert_budget("unreachable!(", MAX_UNREACHABLE);
}

#[test]
fn todo_budget() {
    assert_budget("todo!(", MAX_TODO);
}

#[test]
fn unimplemented_budget() {
    assert_budget("unimplemented!(", MAX_UNIMPLEMENTED);
}

#[test]
fn silent_discard_budget() {
    assert_budget("let _ =", MAX_SILENT_DISCARD);
}

#[test]
fn dot_ok_budget() {
    assert_budget(".ok()", MAX_DOT_OK);
}

#[test]
fn allow_dead_code_budget() {
    assert_budget("#[allow(dead_code)]", MAX_ALLOW_DEAD_CODE);
}

/// `util/mod.rs` must gate every module that imports `web_sys` at the top
/// level, or host builds without the `hydrate` feature break.
#[test]
fn web_sys_modules_are_gated() {
    let files = source_files();
    let Some(util_mod) = files.iter().find(|f| f.path.replace('\\', "/").ends_with("util/mod.rs")) else {
        panic!("util/mod.rs not found");
    };
    let lines = util_mod.content.lines().collect::<Vec<_>>();
    let ungated = files
        .iter()
        .filter(|f| f.content.lines().any(|l| l.starts_with("use web_sys") || l.starts_with("use wasm_bindgen")))
        .filter_map(|f| {
            let stem = Path::new(&f.path).file_stem()?.to_string_lossy().to_string();
            let decl = format!("pub mod {stem};");
            let idx = lines.iter().position(|l| *l == decl)?;
            let gated = idx > 0 && lines[idx - 1].contains("#[cfg(feature = \"hydrate\")]");
            if gated { None } else { Some((f.path.clone(), 1)) }
        })
        .collect::<Vec<_>>();
    assert!(
        total(&ungated) <= MAX_UNGATED_WEB_SYS_MODULES,
        "ungated web-sys modules:\n{}",
        format_hits(&ungated)
    );
}

/// The per-frame nav update only re-reads layout; element lookups happen
/// once in `scroll_nav::install`.
#[test]
fn scroll_frame_does_not_query_dom() {
    let Ok(src) = fs::read_to_string("src/util/scroll_nav.rs") else {
        panic!("src/util/scroll_nav.rs not found");
    };
    let Some(start) = src.find("pub fn update_active_nav") else {
        panic!("update_active_nav not found");
    };
    let body = &src[start..];
    let body = &body[..body.find("\n}\n").unwrap_or(body.len())];
    for lookup in ["query_all", "query_selector", "get_element_by_id", "dom::document"] {
        assert!(!body.contains(lookup), "update_active_nav calls {lookup} on every frame");
    }
    let install = &src[src.find("pub fn install").unwrap_or(0)..];
    assert!(install.contains("query_all_html(&doc, &config.section_selector)"));
    assert!(install.contains("query_all(&doc, &config.nav_link_selector)"));
}
