//! Script and style block stripping
//!
//! Removes whole `<script>`/`<style>` blocks from fetched HTML with a
//! regex pass. This is a text transform, not an HTML parser.

use regex::RegexBuilder;

/// Remove all `<script>` blocks, including their content
pub fn strip_scripts(html: &str) -> String {
    strip_block(html, "script")
}

/// Remove all `<style>` blocks, including their content
pub fn strip_styles(html: &str) -> String {
    strip_block(html, "style")
}

fn strip_block(html: &str, tag: &str) -> String {
    let pattern = format!(r"<{tag}\b[^>]*>[\s\S]*?</{tag}>");
    let re = RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .expect("stripping pattern is valid");
    re.replace_all(html, "").into_owned()
}
