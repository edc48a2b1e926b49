/// File stem of article `id`, e.g. `article-3`
pub fn article_stem(prefix: &str, id: u32) -> String {
    format!("{}{}", prefix, id)
}

/// Joins a site-relative directory and a file name with `/`, whatever the platform
pub fn web_path(dir: &str, file: &str) -> String {
    let dir = dir.trim_end_matches(['/', '\\']);
    if dir.is_empty() {
        file.to_string()
    } else {
        format!("{}/{}", dir, file)
    }
}
