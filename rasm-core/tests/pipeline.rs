use rasm_core::{
    compose_hamza_seats, fold_nonstandard_alef, remove_diacritics, remove_tatweel,
    validate_tables, Normalizer, NormalizerConfig, TehMarbutaStyle,
};

fn folds_disabled() -> NormalizerConfig {
    NormalizerConfig {
        remove_tatweel: false,
        remove_diacritics: false,
        normalize_alef: false,
        normalize_hamza: false,
        normalize_alef_maksura: false,
        normalize_teh_marbuta: false,
        teh_marbuta_style: TehMarbutaStyle::default(),
    }
}

#[test]
fn test_removal_passes_are_idempotent() {
    let samples = [
        "جـــمـــيـــل",
        "بِسْمِ اللهِ الرَّحْمنِ الرَّحِيمِ",
        "Hello مرحبا 123",
        "",
    ];

    for text in samples {
        let once = remove_tatweel(text);
        assert_eq!(remove_tatweel(&once), once);

        let once = remove_diacritics(text);
        assert_eq!(remove_diacritics(&once), once);
    }
}

#[test]
fn test_passes_do_not_touch_untargeted_text() {
    let samples = ["Hello مرحبا 123", "plain ascii", "", "42"];
    let normalizer = Normalizer::default();

    for text in samples {
        assert_eq!(remove_tatweel(text), text);
        assert_eq!(remove_diacritics(text), text);
        assert_eq!(compose_hamza_seats(text), text);
        assert_eq!(fold_nonstandard_alef(text), text);
        assert_eq!(normalizer.normalize(text), text);
    }
}

#[test]
fn test_letter_folds_are_order_independent() {
    let text = "إ أ آ ٱ ؤ ئ ى ة مواصفات Hello";

    let mut single_flag_configs = Vec::new();
    for flag in 0..4 {
        let mut config = folds_disabled();
        match flag {
            0 => config.normalize_alef = true,
            1 => config.normalize_hamza = true,
            2 => config.normalize_alef_maksura = true,
            _ => config.normalize_teh_marbuta = true,
        }
        single_flag_configs.push(config);
    }

    for a in &single_flag_configs {
        for b in &single_flag_configs {
            let first = Normalizer::new(a.clone());
            let second = Normalizer::new(b.clone());
            assert_eq!(
                second.normalize(&first.normalize(text)),
                first.normalize(&second.normalize(text)),
            );
        }
    }
}

#[test]
fn test_hamza_seat_survives_the_full_pipeline() {
    let decomposed = "ا\u{0654}";

    // with alef folding on, the composed seat folds on to bare alef
    assert_eq!(Normalizer::default().normalize(decomposed), "ا");

    // with folding off it must come out as the precomposed letter,
    // never stripped away with the vocalization marks
    let strip = Normalizer::new(NormalizerConfig::strip_only());
    assert_eq!(strip.normalize(decomposed), "أ");

    let below = "ا\u{0655}ن";
    assert_eq!(strip.normalize(below), "إن");
}

#[test]
fn test_reference_pipeline_cases() {
    let normalizer = Normalizer::default();

    assert_eq!(remove_tatweel("جـــمـــيـــل"), "جميل");
    assert_eq!(remove_diacritics("بِسْمِ"), "بسم");
    assert_eq!(fold_nonstandard_alef("ٱلحمد"), "الحمد");

    for variant in ["إ", "أ", "ٱ", "آ"] {
        assert_eq!(normalizer.normalize(variant), "ا");
    }

    assert_eq!(
        normalizer.normalize("بِسْمِ اللهِ الرَّحْمنِ الرَّحِيمِ"),
        "بسم الله الرحمن الرحيم"
    );
}

#[test]
fn test_mixed_script_text_passes_through() {
    let normalizer = Normalizer::default();
    let normalized = normalizer.normalize("Hello جـــمـــيـــل 123");
    assert_eq!(normalized, "Hello جميل 123");
    assert!(normalized.starts_with("Hello "));
    assert!(normalized.ends_with(" 123"));
}

#[test]
fn test_table_invariants_hold() {
    validate_tables().unwrap();
}

#[test]
fn test_config_parses_from_json() {
    let config: NormalizerConfig = serde_json::from_str(
        r#"{
            "remove_tatweel": true,
            "remove_diacritics": false,
            "normalize_alef": true,
            "normalize_hamza": false,
            "normalize_alef_maksura": true,
            "normalize_teh_marbuta": true,
            "teh_marbuta_style": "FinalHehToTehMarbuta"
        }"#,
    )
    .unwrap();

    assert!(!config.remove_diacritics);
    assert_eq!(config.teh_marbuta_style, TehMarbutaStyle::FinalHehToTehMarbuta);

    let normalizer = Normalizer::new(config);
    assert_eq!(normalizer.normalize("مدرسه"), "مدرسة");
}
