// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_note(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with *some* **content** and $x^2$.\n\nFirst line\\\nsecond line\\\nthird line\n\n- Bullet point\n  - Nested item\n- Another item\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n\\[\n\\int_0^1 x\\,dx\n\\]\n\n| a | b |\n|---|---|\n| 1 | 2 |\n\n> quoted *text*\n> more\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_nested_quotes(depth: usize) -> String {
    let mut content = String::new();
    for level in 1..=depth {
        content.push_str(&"> ".repeat(level));
        content.push_str(&format!("level {level}\n"));
    }
    content
}
