use endrift_services::RunSummary;

/// Print the run's unresolved differences the way maintainers triage
/// them: case differences first with both texts, then spelling/
/// translation differences with a character-level diff.
pub fn print_summary(summary: &RunSummary, use_color: bool) {
    if !summary.report.case.is_empty() {
        println!("\nDifferent case:");
        for id in &summary.report.case {
            print_pair(summary, id, use_color);
        }
    }

    if !summary.report.spelling.is_empty() {
        println!("\nDifferent translations:");
        for id in &summary.report.spelling {
            print_pair(summary, id, use_color);
            let source = summary.reference.get(id).map(String::as_str).unwrap_or("");
            let translation = summary.candidate.get(id).map(String::as_str).unwrap_or("");
            println!("Differences:");
            println!("{}", char_diff(source, translation).join(" "));
        }
    }

    if summary.report.is_empty() {
        println!("\nNo differences found.");
    }
}

fn print_pair(summary: &RunSummary, id: &str, use_color: bool) {
    let source = summary.reference.get(id).map(String::as_str).unwrap_or("");
    let translation = summary.candidate.get(id).map(String::as_str).unwrap_or("");
    if use_color {
        use owo_colors::OwoColorize;
        println!("\nID: {}", id.green());
        println!("Source: {}", source.cyan());
        println!("Translation: {}", translation.yellow());
    } else {
        println!("\nID: {id}");
        println!("Source: {source}");
        println!("Translation: {translation}");
    }
}

/// Character-level diff of two strings as `-x` / `+y` tokens, in text
/// order, with common characters omitted. Small strings only; the
/// quadratic LCS table is fine at UI-string sizes.
pub fn char_diff(a: &str, b: &str) -> Vec<String> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut lcs = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for i in (0..a.len()).rev() {
        for j in (0..b.len()).rev() {
            lcs[i][j] = if a[i] == b[j] {
                lcs[i + 1][j + 1] + 1
            } else {
                lcs[i + 1][j].max(lcs[i][j + 1])
            };
        }
    }

    let mut out = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        if a[i] == b[j] {
            i += 1;
            j += 1;
        } else if lcs[i + 1][j] >= lcs[i][j + 1] {
            out.push(format!("-{}", a[i]));
            i += 1;
        } else {
            out.push(format!("+{}", b[j]));
            j += 1;
        }
    }
    for c in &a[i..] {
        out.push(format!("-{c}"));
    }
    for c in &b[j..] {
        out.push(format!("+{c}"));
    }
    out
}
