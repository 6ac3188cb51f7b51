use std::fs;
use crate::errors::ReadmeError;

/// Result of an update of the README file
#[derive(Debug, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updated,
    Unchanged,
    MarkerNotFound,
}

/// A line of the document with its byte offsets
struct Line<'a> {
    start: usize,
    text: &'a str,
    in_fence: bool,
}

impl Line<'_> {
    fn text_end(&self) -> usize {
        self.start + self.text.len()
    }
}

/// Replaces the section of the README starting with the marker heading and writes the
/// file back if anything changed. A missing marker leaves the file untouched.
///
/// # Arguments
///
/// * 'path' - path to the README file
/// * 'marker' - heading line that starts the section
/// * 'section' - new section content, starting with the marker
pub fn update_readme(path: &str, marker: &str, section: &str) -> Result<UpdateOutcome, ReadmeError> {
    let content = fs::read_to_string(path)
        .map_err(|e| ReadmeError::Read(path.to_string(), e))?;

    let Some(updated) = splice_section(&content, marker, section) else {
        return Ok(UpdateOutcome::MarkerNotFound);
    };

    if updated == content {
        return Ok(UpdateOutcome::Unchanged);
    }

    fs::write(path, updated)
        .map_err(|e| ReadmeError::Write(path.to_string(), e))?;

    Ok(UpdateOutcome::Updated)
}

/// Splices a new section into the document.
///
/// The section starts at the first line beginning with the marker outside fenced code
/// blocks. It runs up to the last non-blank line before the next level one or two
/// heading (level one only if the marker is a level one heading), or before end of
/// document. Blank lines and line breaks after the section are kept as they are.
///
/// Returns None if the marker is not found.
///
/// # Arguments
///
/// * 'content' - the document
/// * 'marker' - heading line that starts the section
/// * 'section' - new section content, surrounding whitespace is trimmed
pub fn splice_section(content: &str, marker: &str, section: &str) -> Option<String> {
    let lines = scan_lines(content);
    let boundary = heading_level(marker).unwrap_or(2).min(2);

    let anchor = lines.iter().position(|l| !l.in_fence && l.text.starts_with(marker))?;

    let mut end = lines[anchor].text_end();
    for line in &lines[anchor + 1..] {
        if !line.in_fence && heading_level(line.text).is_some_and(|level| level <= boundary) {
            break;
        }
        if !line.text.trim().is_empty() {
            end = line.text_end();
        }
    }

    let start = lines[anchor].start;
    let mut result = String::with_capacity(content.len() + section.len());
    result.push_str(&content[..start]);
    result.push_str(section.trim());
    result.push_str(&content[end..]);

    Some(result)
}

/// Splits the document into lines, keeping track of fenced code blocks
fn scan_lines(content: &str) -> Vec<Line<'_>> {
    let mut lines = Vec::new();
    let mut fence: Option<(char, usize)> = None;
    let mut start = 0;

    for raw in content.split_inclusive('\n') {
        let text = raw.trim_end_matches('\n').trim_end_matches('\r');

        let in_fence = match (fence, fence_marker(text)) {
            (None, Some(opening)) => {
                fence = Some(opening);
                true
            },
            (Some((c, n)), Some((closing_c, closing_n))) if c == closing_c && closing_n >= n => {
                fence = None;
                true
            },
            (Some(_), _) => true,
            (None, None) => false,
        };

        lines.push(Line { start, text, in_fence });
        start += raw.len();
    }

    lines
}

/// Returns the fence character and its run length if the line opens or closes a code block
fn fence_marker(text: &str) -> Option<(char, usize)> {
    let trimmed = text.trim_start_matches(' ');
    if text.len() - trimmed.len() > 3 {
        return None;
    }

    let c = trimmed.chars().next()?;
    if c != '`' && c != '~' {
        return None;
    }

    let run = trimmed.chars().take_while(|&x| x == c).count();
    if run >= 3 { Some((c, run)) } else { None }
}

/// Returns the level of an ATX heading ("# " to "###### "), or None if the line is no heading
fn heading_level(text: &str) -> Option<usize> {
    let level = text.chars().take_while(|&c| c == '#').count();
    if level == 0 || level > 6 {
        return None;
    }

    match text[level..].chars().next() {
        None | Some(' ') | Some('\t') => Some(level),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARKER: &str = "## 👋 Hi there!";
    const SECTION: &str = "## 👋 Hi there!\n\n### ☀️ Clear sky\n\n| Day | Weather |\n|-----|---------|\n| Tue | ☀️ Clear |\n";

    #[test]
    fn replaces_up_to_next_heading() {
        let content = "# Profile\n\nIntro text\n\n## 👋 Hi there!\n\nold weather\n### old forecast\n| Mon | rain |\n\n## Projects\n\n* one\n";

        let updated = splice_section(content, MARKER, SECTION).unwrap();

        assert_eq!(updated, format!(
            "# Profile\n\nIntro text\n\n{}\n\n## Projects\n\n* one\n", SECTION.trim()));
    }

    #[test]
    fn replaces_up_to_end_of_file() {
        let content = "# Profile\n\n## 👋 Hi there!\nold weather\n\n";

        let updated = splice_section(content, MARKER, SECTION).unwrap();

        assert_eq!(updated, format!("# Profile\n\n{}\n\n", SECTION.trim()));
    }

    #[test]
    fn second_run_is_identical() {
        let content = "# Profile\n\n## 👋 Hi there!\nold\n\n## Projects\ntext\n";

        let first = splice_section(content, MARKER, SECTION).unwrap();
        let second = splice_section(&first, MARKER, SECTION).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn missing_marker_gives_none() {
        let content = "# Profile\n\n## Projects\n";
        assert!(splice_section(content, MARKER, SECTION).is_none());
    }

    #[test]
    fn marker_in_code_block_is_ignored() {
        let content = "# Docs\n\n```markdown\n## 👋 Hi there!\n```\n\n## 👋 Hi there!\nold\n";

        let updated = splice_section(content, MARKER, SECTION).unwrap();

        assert_eq!(updated, format!("# Docs\n\n```markdown\n## 👋 Hi there!\n```\n\n{}\n", SECTION.trim()));
    }

    #[test]
    fn heading_in_code_block_does_not_end_section() {
        let content = "## 👋 Hi there!\n~~~\n## not a heading\n~~~\nold\n## Next\n";

        let updated = splice_section(content, MARKER, "## 👋 Hi there!\nnew").unwrap();

        assert_eq!(updated, "## 👋 Hi there!\nnew\n## Next\n");
    }

    #[test]
    fn top_level_heading_ends_section() {
        let content = "## 👋 Hi there!\nold\n# Appendix\n";

        let updated = splice_section(content, MARKER, "## 👋 Hi there!\nnew").unwrap();

        assert_eq!(updated, "## 👋 Hi there!\nnew\n# Appendix\n");
    }

    #[test]
    fn crlf_line_endings_are_kept_outside_section() {
        let content = "# Top\r\n## 👋 Hi there!\r\nold\r\n\r\n## Next\r\n";

        let updated = splice_section(content, MARKER, "## 👋 Hi there!\nnew").unwrap();

        assert_eq!(updated, "# Top\r\n## 👋 Hi there!\nnew\r\n\r\n## Next\r\n");
    }

    #[test]
    fn headings() {
        assert_eq!(heading_level("# Top"), Some(1));
        assert_eq!(heading_level("## 👋 Hi there!"), Some(2));
        assert_eq!(heading_level("###"), Some(3));
        assert_eq!(heading_level("#hashtag"), None);
        assert_eq!(heading_level("####### seven"), None);
        assert_eq!(heading_level("plain"), None);
    }

    #[test]
    fn update_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("README.md");
        fs::write(&path, "# Me\n\n## 👋 Hi there!\nold\n\n## Links\n").unwrap();
        let path = path.to_str().unwrap();

        assert_eq!(update_readme(path, MARKER, SECTION).unwrap(), UpdateOutcome::Updated);
        let first = fs::read_to_string(path).unwrap();
        assert!(first.contains("### ☀️ Clear sky"));
        assert!(first.ends_with("| Tue | ☀️ Clear |\n\n## Links\n"));

        assert_eq!(update_readme(path, MARKER, SECTION).unwrap(), UpdateOutcome::Unchanged);
        assert_eq!(fs::read_to_string(path).unwrap(), first);
    }

    #[test]
    fn update_without_marker_leaves_file_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("README.md");
        let content = "# Me\n\nNothing to see here.\n";
        fs::write(&path, content).unwrap();
        let path = path.to_str().unwrap();

        assert_eq!(update_readme(path, MARKER, SECTION).unwrap(), UpdateOutcome::MarkerNotFound);
        assert_eq!(fs::read_to_string(path).unwrap(), content);
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.md");

        let result = update_readme(path.to_str().unwrap(), MARKER, SECTION);
        assert!(matches!(result, Err(ReadmeError::Read(_, _))));
    }
}
