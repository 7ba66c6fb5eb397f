/// Achievement lines are kept verbatim.
pub fn extract(lines: &[String]) -> Vec<String> {
    lines.to_vec()
}
