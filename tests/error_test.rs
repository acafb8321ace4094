use std::io;

use flint::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::ManifestNotFound {
        template_dir: "/templates/web".to_string(),
        manifest_files: "template.json".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "No manifest file found in '/templates/web'. Tried: template.json."
    );

    let err = Error::GenerationAborted { path: "out/a.txt".to_string() };
    assert_eq!(err.to_string(), "Generation aborted at 'out/a.txt'.");

    let err = Error::UnsupportedInputFormat { path: "input.toml".to_string() };
    assert!(err.to_string().contains("input.toml"));
}
