//! Integration tests for writing exports to disk

use std::fs;

use resvg::tiny_skia::Pixmap;
use tempfile::TempDir;

use text_avatar::{
    AvatarSession, ExportError, ExportFormat, FitMode, GenerationError, IdenticonSource,
    RasterConfig, RenderError, Seed, VectorDocument,
};

fn ready_session() -> AvatarSession<IdenticonSource> {
    let mut session = AvatarSession::new(IdenticonSource::default());
    session.on_seed_changed("abc123").unwrap();
    session
}

#[test]
fn test_save_vector_writes_document_bytes() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("avatar.svg");
    let session = ready_session();

    session.save_vector(&path).unwrap();
    assert_eq!(fs::read(&path).unwrap(), session.export_vector().unwrap());
}

#[test]
fn test_save_raster_writes_png() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("avatar.png");

    ready_session().save_raster(&path, 128, 96).unwrap();
    let pixmap = Pixmap::load_png(&path).unwrap();
    assert_eq!((pixmap.width(), pixmap.height()), (128, 96));
}

#[test]
fn test_save_infers_format_from_extension() {
    let dir = TempDir::new().unwrap();
    let session = ready_session().with_raster_config(RasterConfig::new().with_size(48, 48));

    let svg = dir.path().join("a.SVG");
    let png = dir.path().join("a.png");
    assert_eq!(session.save(&svg).unwrap(), ExportFormat::Svg);
    assert_eq!(session.save(&png).unwrap(), ExportFormat::Png);

    assert!(fs::read_to_string(&svg).unwrap().contains("<svg"));
    assert_eq!(Pixmap::load_png(&png).unwrap().width(), 48);
}

#[test]
fn test_save_unknown_extension_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("avatar.gif");

    let err = ready_session().save(&path).unwrap_err();
    assert!(matches!(err, ExportError::UnknownFormat { .. }));
    assert!(!path.exists());
}

#[test]
fn test_save_without_document_is_user_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("avatar.gif");
    let session = AvatarSession::new(IdenticonSource::default());

    // the missing document is reported before the bad extension
    assert!(matches!(
        session.save(&path),
        Err(ExportError::NothingToExport)
    ));
    assert!(!path.exists());
}

#[test]
fn test_render_failure_leaves_no_file() {
    let broken = |seed: &Seed| {
        VectorDocument::new("<svg").ok_or_else(|| GenerationError::new(seed.as_str(), "empty"))
    };
    let mut session = AvatarSession::new(broken);
    session.on_seed_changed("x").unwrap();

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.png");
    let err = session.save_raster(&path, 64, 64).unwrap_err();

    assert!(matches!(err, ExportError::Render(RenderError::Parse(_))));
    assert!(!path.exists());
}

#[test]
fn test_write_failure_is_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("avatar.svg");

    let err = ready_session().save_vector(&path).unwrap_err();
    match err {
        ExportError::Io { path: failed, .. } => assert_eq!(failed, path),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn test_contain_fit_applies_to_saved_png() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("wide.png");
    let session = ready_session()
        .with_raster_config(RasterConfig::new().with_size(200, 100).with_fit(FitMode::Contain));

    session.save(&path).unwrap();
    let pixmap = Pixmap::load_png(&path).unwrap();
    // square avatar letterboxed into the middle: left and right bands are empty
    assert_eq!(pixmap.pixel(10, 50).unwrap().alpha(), 0);
    assert_eq!(pixmap.pixel(190, 50).unwrap().alpha(), 0);
    assert_eq!(pixmap.pixel(100, 50).unwrap().alpha(), 255);
}
