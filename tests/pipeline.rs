use std::thread;

use lipsync::phonemes::from_fn;
use lipsync::{line_to_visemes, normalize, resolve_unknown, segment, transcribe, LipSyncPipeline};

#[test]
fn known_name_is_resolved_end_to_end() {
    lipsync::logging::init("lipsync=trace");
    assert_eq!(
        line_to_visemes("Hi, Monika!"),
        vec![1, 12, 16, 0, 10, 12, 8, 16, 9, 11, 0]
    );
}

#[test]
fn stages_compose_like_the_pipeline() {
    let raw = "Hi, Monika!";
    let composed = segment(&resolve_unknown(&transcribe(&normalize(raw))));
    assert_eq!(composed, line_to_visemes(raw));
}

#[test]
fn numeral_reaches_the_mouth_with_its_fraction() {
    // The "point zero" comes from parsing numerals as floats.
    let report = LipSyncPipeline::default().analyze("Room 5");
    assert_eq!(report.normalized, "room five point zero");
    assert_eq!(report.phonetic, "ɹˈum fˈaɪv pˈɔɪnt zˈɪɹoʊ");
    assert_eq!(
        report.visemes,
        vec![2, 17, 10, 7, 12, 16, 7, 10, 13, 16, 8, 8, 4, 16, 2, 18, 14]
    );
}

#[test]
fn large_scale_words_are_pronounced() {
    let report = LipSyncPipeline::default().analyze("5000000000000");
    assert_eq!(report.normalized, "five trillion point zero");
    assert!(!report.phonetic.contains('*'), "{}", report.phonetic);
    assert_eq!(report.resolved, report.phonetic);
}

#[test]
fn unknown_words_vanish_without_placeholder() {
    let report = LipSyncPipeline::default().analyze("Hello, zzqx!");
    assert_eq!(report.phonetic, "həlˈoʊ, zzqx*!");
    assert_eq!(report.resolved, "həlˈoʊ, !");
    assert_eq!(report.visemes, vec![1, 11, 3, 18, 14, 0, 0]);
}

#[test]
fn empty_line_has_no_visemes() {
    assert!(line_to_visemes("").is_empty());
    assert!(line_to_visemes("{w=0.5}[player]").is_empty());
}

#[test]
fn stub_transcriber_receives_normalized_text() {
    let pipeline = LipSyncPipeline::new(from_fn(|text: &str| {
        assert_eq!(text, "it's twenty one point zero");
        "ɪts".to_string()
    }));
    assert_eq!(pipeline.visemes("It's 21"), vec![16, 8, 4]);
}

#[test]
fn report_serializes_to_json() {
    let report = LipSyncPipeline::default().analyze("Yes.");
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["normalized"], "yes.");
    assert_eq!(value["visemes"], serde_json::json!([16, 14, 4, 0]));
}

#[test]
fn shared_pipeline_is_safe_across_threads() {
    let pipeline = &LipSyncPipeline::default();
    let lines = [
        "Hi, Monika!",
        "Welcome to the literature club!",
        "I think 3 friends are here.",
        "Natsuki, Yuri, Sayori...",
    ];
    let expected: Vec<_> = lines.iter().map(|line| pipeline.visemes(line)).collect();

    thread::scope(|scope| {
        let handles: Vec<_> = lines
            .iter()
            .map(|line| scope.spawn(move || pipeline.visemes(line)))
            .collect();
        for (handle, expected) in handles.into_iter().zip(&expected) {
            assert_eq!(&handle.join().unwrap(), expected);
        }
    });
}
