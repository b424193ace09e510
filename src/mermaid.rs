/// Build a Mermaid flow diagram from commit messages in chronological order.
///
/// Each message becomes one node labeled with its position, and consecutive
/// nodes are chained with directed edges, oldest commit at the top:
///
/// ```text
/// graph TD;
///     0: "initial commit"
///     1: "add feature"
///     0 --> 1
/// ```
///
/// All node lines come before all edge lines, and the result carries no
/// trailing newline. Messages are embedded verbatim; a message containing
/// quote characters produces output that strict Mermaid parsers may reject.
pub fn build(messages: &[String]) -> String {
    let mut lines = vec!["graph TD;".to_string()];

    for (i, message) in messages.iter().enumerate() {
        lines.push(format!("    {}: \"{}\"", i, message));
    }

    for i in 1..messages.len() {
        lines.push(format!("    {} --> {}", i - 1, i));
    }

    lines.join("\n")
}

#[cfg(test)]
#[path = "mermaid_test.rs"]
mod tests;
