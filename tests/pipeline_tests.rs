//! Integration tests for the seed → document → export pipeline

use pretty_assertions::assert_eq;
use resvg::tiny_skia::Pixmap;

use text_avatar::{
    AvatarSession, DocumentState, ExportError, GenerationError, IdenticonSource, Seed,
    VectorDocument,
};

/// Square document with a filled rect covering the middle half of the canvas
fn centered_square(seed: &Seed) -> Result<VectorDocument, GenerationError> {
    VectorDocument::new(format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100" viewBox="0 0 100 100"><title>{}</title><rect x="25" y="25" width="50" height="50" fill="#123456"/></svg>"##,
        seed
    ))
    .ok_or_else(|| GenerationError::new(seed.as_str(), "empty"))
}

fn decode(png: &[u8]) -> Pixmap {
    Pixmap::decode_png(png).expect("export should be a decodable PNG")
}

#[test]
fn test_generation_is_deterministic() {
    for text in ["a", "abc123", "xyz", "头像", "with spaces and symbols !@#"] {
        let mut first = AvatarSession::new(IdenticonSource::default());
        let mut second = AvatarSession::new(IdenticonSource::default());
        let a = first.on_seed_changed(text).unwrap().cloned();
        let b = second.on_seed_changed(text).unwrap().cloned();
        assert_eq!(a, b, "seed {:?} produced different documents", text);
    }
}

#[test]
fn test_empty_input_yields_no_document_and_no_error() {
    let mut session = AvatarSession::new(IdenticonSource::default());
    assert_eq!(session.on_seed_changed("").unwrap(), None);
    assert_eq!(session.state(), DocumentState::Idle);
}

#[test]
fn test_vector_round_trip() {
    let source = IdenticonSource::default();
    let expected = text_avatar::generate_with(&source, "abc123").unwrap().unwrap();

    let mut session = AvatarSession::new(source);
    session.on_seed_changed("abc123").unwrap();
    assert_eq!(session.export_vector().unwrap(), expected.as_str().as_bytes());
}

#[test]
fn test_exports_before_generation_are_user_errors() {
    let session = AvatarSession::new(IdenticonSource::default());
    let vector = session.export_vector().unwrap_err();
    let raster = session.export_raster(1024, 1024).unwrap_err();
    assert!(matches!(vector, ExportError::NothingToExport));
    assert!(matches!(raster, ExportError::NothingToExport));
    assert!(vector.is_user_error());
}

#[test]
fn test_regeneration_replaces_document() {
    let mut session = AvatarSession::new(IdenticonSource::default());
    let first = session.on_seed_changed("s1").unwrap().cloned().unwrap();
    let second = session.on_seed_changed("s2").unwrap().cloned().unwrap();

    assert_ne!(first, second);
    assert_eq!(session.document(), Some(&second));
    assert_eq!(session.seed().map(Seed::as_str), Some("s2"));
    assert_eq!(session.export_vector().unwrap(), second.as_bytes());
}

#[test]
fn test_clear_and_reproduce_scenario() {
    let mut session = AvatarSession::new(IdenticonSource::default());

    let d1 = session.on_seed_changed("abc123").unwrap().cloned().unwrap();
    assert_eq!(session.export_vector().unwrap(), d1.as_bytes());

    assert_eq!(session.on_seed_changed("").unwrap(), None);
    assert!(matches!(
        session.export_vector(),
        Err(ExportError::NothingToExport)
    ));

    let again = session.on_seed_changed("abc123").unwrap().cloned().unwrap();
    assert_eq!(again, d1);
}

#[test]
fn test_raster_export_is_full_size() {
    let mut session = AvatarSession::new(IdenticonSource::default());
    session.on_seed_changed("xyz").unwrap();

    let pixmap = decode(&session.export_raster(1024, 1024).unwrap());
    assert_eq!((pixmap.width(), pixmap.height()), (1024, 1024));
}

#[test]
fn test_raster_background_is_transparent() {
    let mut session = AvatarSession::new(centered_square);
    session.on_seed_changed("shape").unwrap();

    for (w, h) in [(64, 64), (200, 100), (33, 77)] {
        let pixmap = decode(&session.export_raster(w, h).unwrap());
        assert_eq!((pixmap.width(), pixmap.height()), (w, h));

        // outside the drawn rect (middle half of each axis)
        for (x, y) in [(0, 0), (w - 1, 0), (0, h - 1), (w - 1, h - 1)] {
            assert_eq!(pixmap.pixel(x, y).unwrap().alpha(), 0, "({x}, {y}) in {w}x{h}");
        }
        assert_eq!(pixmap.pixel(w / 2, h / 2).unwrap().alpha(), 255);
    }
}

#[test]
fn test_builtin_avatar_corners_are_transparent() {
    let mut session = AvatarSession::new(IdenticonSource::default());
    session.on_seed_changed("round").unwrap();

    let pixmap = decode(&session.export_raster(256, 256).unwrap());
    assert_eq!(pixmap.pixel(0, 0).unwrap().alpha(), 0);
    assert_eq!(pixmap.pixel(255, 255).unwrap().alpha(), 0);
    assert_eq!(pixmap.pixel(128, 128).unwrap().alpha(), 255);
}

#[test]
fn test_random_request_produces_reproducible_document() {
    let mut session = AvatarSession::new(IdenticonSource::default());
    let (seed, document) = session.on_random_requested().unwrap();
    let document = document.clone();

    let regenerated = text_avatar::generate(seed.as_str()).unwrap();
    assert_eq!(regenerated, Some(document));
}

#[test]
fn test_session_survives_generation_failure() {
    let picky = |seed: &Seed| {
        if seed.as_str().starts_with('!') {
            Err(GenerationError::new(seed.as_str(), "rejected"))
        } else {
            centered_square(seed)
        }
    };
    let mut session = AvatarSession::new(picky);

    assert!(session.on_seed_changed("!first").is_err());
    assert_eq!(session.state(), DocumentState::Idle);

    session.on_seed_changed("ok").unwrap();
    assert!(session.on_seed_changed("!later").is_err());
    assert_eq!(session.seed().map(Seed::as_str), Some("ok"));
    assert!(session.export_raster(32, 32).is_ok());
}
