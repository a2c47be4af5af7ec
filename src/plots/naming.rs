use std::collections::HashSet;

/// Makes a column name usable as a file stem.
///
/// Characters other than alphanumerics, `_`, `-` and `.` become `_`; leading
/// dots are dropped so the file is never hidden.
pub fn file_stem(name: &str) -> String {
    let clean: String = name
        .trim()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, '_' | '-' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let clean = clean.trim_start_matches('.');

    if clean.is_empty() {
        "column".to_owned()
    } else {
        clean.to_owned()
    }
}

/// Hands out unique file names within one output directory.
#[derive(Debug, Default)]
pub struct FileNames {
    taken: HashSet<String>,
}

impl FileNames {
    /// `<stem>_<suffix>.<ext>`, with `_1`, `_2`, ... appended to the stem on collision.
    pub fn claim(&mut self, column: &str, suffix: &str, ext: &str) -> String {
        let stem = file_stem(column);
        let mut candidate = format!("{stem}_{suffix}.{ext}");
        let mut n = 0;
        while !self.taken.insert(candidate.to_lowercase()) {
            n += 1;
            candidate = format!("{stem}_{n}_{suffix}.{ext}");
        }
        candidate
    }
}
