/// ATX heading with one to six `#` and a mandatory space.
pub struct Heading;

impl Heading {
    pub fn is_heading(line: &str) -> bool {
        regex!(r"^\s*#{1,6} ").is_match(line)
    }

    /// Level and text of a heading line.
    pub fn parse(line: &str) -> Option<(usize, &str)> {
        let caps = regex!(r"^\s*(#{1,6}) (.*)$").captures(line)?;
        let level = caps.get(1)?.as_str().len();
        Some((level, caps.get(2)?.as_str()))
    }
}
