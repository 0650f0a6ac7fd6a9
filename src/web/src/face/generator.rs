use nba_core::utils::StringUtils;

struct FaceRng {
    state: u64,
}

impl FaceRng {
    fn new(slug: &str) -> Self {
        // FNV-1a, stable across builds
        let mut s: u64 = 0xCBF29CE484222325;
        for byte in slug.bytes() {
            s ^= byte as u64;
            s = s.wrapping_mul(0x100000001B3);
        }
        s = (s ^ (s >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
        s = (s ^ (s >> 27)).wrapping_mul(0x94D049BB133111EB);
        s ^= s >> 31;
        if s == 0 { s = 1; }
        FaceRng { state: s }
    }

    fn next(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    fn range(&mut self, max: usize) -> usize {
        (self.next() % max as u64) as usize
    }
}

/// Team-ish colour pairs: (background, accent)
const PALETTE: [(&str, &str); 10] = [
    ("#552583", "#FDB927"),
    ("#007A33", "#BA9653"),
    ("#CE1141", "#000000"),
    ("#1D428A", "#FFC72C"),
    ("#98002E", "#F9A01B"),
    ("#C4CED4", "#000000"),
    ("#006BB6", "#F58426"),
    ("#E56020", "#1D1160"),
    ("#0E2240", "#FEC524"),
    ("#E03A3E", "#C1D32F"),
];

const UNKNOWN_INITIALS: &str = "?";

fn escape(value: &str) -> String {
    value
        .chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '"' => "&quot;".to_string(),
            '\'' => "&apos;".to_string(),
            _ => c.to_string(),
        })
        .collect()
}

pub fn initials_for(slug: &str) -> String {
    let initials = StringUtils::initials(slug);

    if initials.is_empty() {
        UNKNOWN_INITIALS.to_string()
    } else {
        initials
    }
}

/// viewBox = "0 0 80 100", same portrait frame as the roster cards
pub fn generate_face_svg(slug: &str) -> String {
    let mut r = FaceRng::new(slug);

    let (background, accent) = PALETTE[r.range(PALETTE.len())];
    let stripe = 8 + r.range(3) * 4;

    let initials = escape(&initials_for(slug));

    let mut s = String::with_capacity(1024);

    s.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 80 100">"#);

    s.push_str(&format!(r#"<rect width="80" height="100" fill="{}"/>"#, background));
    s.push_str(&format!(
        r#"<rect y="{}" width="80" height="{}" fill="{}" opacity="0.85"/>"#,
        100 - stripe, stripe, accent
    ));

    // Jersey circle
    s.push_str(&format!(
        r#"<circle cx="40" cy="46" r="28" fill="{}" opacity="0.2"/>"#, accent
    ));
    s.push_str(&format!(
        r#"<circle cx="40" cy="46" r="28" fill="none" stroke="{}" stroke-width="2"/>"#, accent
    ));

    s.push_str(&format!(
        r##"<text x="40" y="55" text-anchor="middle" font-family="Helvetica, Arial, sans-serif" font-size="26" font-weight="700" fill="#FFFFFF">{}</text>"##,
        initials
    ));

    s.push_str("</svg>");
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_slug_renders_same_svg() {
        assert_eq!(
            generate_face_svg("michael-jordan"),
            generate_face_svg("michael-jordan")
        );
    }

    #[test]
    fn test_svg_contains_initials() {
        let svg = generate_face_svg("larry-bird");

        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains(">LB</text>"));
    }

    #[test]
    fn test_missing_initials_use_placeholder() {
        assert_eq!(initials_for(""), "?");
        assert!(generate_face_svg("--").contains(">?</text>"));
    }

    #[test]
    fn test_initials_are_escaped() {
        let svg = generate_face_svg("<script>-&co");

        assert!(svg.contains(">&lt;&amp;</text>"));
        assert!(!svg.contains("<script"));
    }

    #[test]
    fn test_palette_choice_depends_on_slug() {
        let choices: std::collections::HashSet<usize> = (0..50)
            .map(|i| FaceRng::new(&format!("player-{}", i)).range(PALETTE.len()))
            .collect();

        assert!(choices.len() > 1);
    }
}
