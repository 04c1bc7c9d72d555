use lipsync::text::is_normalized_char;
use lipsync::visemes::segment_spans;
use lipsync::{line_to_visemes, normalize, MAX_VISEME};

fn corpus() -> Vec<String> {
    let mut lines: Vec<String> = [
        "",
        "   ",
        "[",
        "]",
        "{[}]",
        "[unterminated {w=1",
        "1.2.3",
        "...5",
        "5.",
        ".5.",
        "-",
        "--5--",
        "a-b-c",
        "ÀÉÎõü ß",
        "İstanbul",
        "日本語のテキスト",
        "🙂 smile 🙂",
        "\u{0}\u{7f}\t\r\n",
        "٣ arabic-indic digit",
        "Monika* literally* typed stars*",
        "[player]: {i}Wait{/i}... it's 12:30, isn't it?",
        "100000000000000000000000000000000000000000000000",
    ]
    .iter()
    .map(|line| line.to_string())
    .collect();
    lines.push("9".repeat(400));
    lines.push("ab".repeat(500));
    lines
}

#[test]
fn normalized_text_stays_in_alphabet() {
    for line in corpus() {
        let normalized = normalize(&line);
        assert!(
            normalized.chars().all(is_normalized_char),
            "{line:?} normalized to {normalized:?}"
        );
    }
}

#[test]
fn normalizing_twice_changes_nothing() {
    for line in corpus() {
        let once = normalize(&line);
        assert_eq!(normalize(&once), once, "input {line:?}");
    }
}

#[test]
fn every_line_maps_to_valid_codes() {
    for line in corpus() {
        let visemes = line_to_visemes(&line);
        assert!(
            visemes.iter().all(|&code| code <= MAX_VISEME),
            "{line:?} produced {visemes:?}"
        );
    }
}

#[test]
fn segmenter_steps_are_bounded_by_symbols() {
    for line in corpus() {
        let spans = segment_spans(&line);
        assert!(spans.len() <= line.chars().count());
        assert!(spans.iter().all(|span| !span.symbols.is_empty()));
        assert!(spans.iter().all(|span| span.visemes.len() <= 3));
    }
}
