pub const OUTPUT_FILE_NAME: &str = "services_output.md";
pub const MARKDOWN_MEDIA_TYPE: &str = "text/markdown";

/// A rendered document together with the file it was saved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    pub markdown: String,
    pub output_path: String,
    pub file_name: String,
    pub media_type: &'static str,
    pub dealership_count: usize,
}

/// Wraps the document in a fenced `markdown` code block for display. The
/// fence is always longer than any backtick run inside the document.
pub fn render_code_block(markdown: &str) -> String {
    let longest_run = markdown
        .split(|c| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    let fence = "`".repeat(longest_run.max(2) + 1);

    let mut block = format!("{}markdown\n{}", fence, markdown);
    if !markdown.ends_with('\n') {
        block.push('\n');
    }
    block.push_str(&fence);
    block
}
