//! Interpolation tests for the configuration loader.
//!
//! Responsibilities:
//! - Test reference lookup order (section, then default section).
//! - Test the error variants raised for unresolvable values.

use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;

#[test]
fn test_missing_reference_names_the_key() {
    match ConfigLoader::load_str("/tmp/a.ini", "[a]\nk=%(missing)s\n") {
        Err(ConfigError::MissingReference {
            section,
            option,
            reference,
            ..
        }) => {
            assert_eq!(section, "a");
            assert_eq!(option, "k");
            assert_eq!(reference, "missing");
        }
        other => panic!("expected MissingReference, got {other:?}"),
    }
}

#[test]
fn test_section_value_shadows_default_in_references() {
    let text = "[DEFAULT]\nhost = 127.0.0.1\nuri = http://%(host)s:%(port)s\nport = 80\n\
                [daemon.a]\nhost = 10.0.0.1\n[daemon.b]\nport = 7771\n";
    let resolver = ConfigLoader::load_str("/tmp/a.ini", text).unwrap();

    assert_eq!(resolver.daemon("a").get("uri"), Some("http://10.0.0.1:80"));
    assert_eq!(resolver.daemon("b").get("uri"), Some("http://127.0.0.1:7771"));
    assert_eq!(resolver.defaults().get("uri"), Some("http://127.0.0.1:80"));
}

#[test]
fn test_default_referencing_section_key_stays_raw() {
    let text = "[DEFAULT]\nlog = %(name)s.log\n[daemon.poller]\nname = poller\n";
    let resolver = ConfigLoader::load_str("/tmp/a.ini", text).unwrap();

    assert_eq!(resolver.defaults().get("log"), Some("%(name)s.log"));
    assert_eq!(resolver.daemon("poller").get("log"), Some("poller.log"));
}

#[test]
fn test_inherited_default_still_fails_when_unresolvable() {
    let text = "[DEFAULT]\nlog = %(name)s.log\n[daemon.poller]\nport = 1\n";
    let result = ConfigLoader::load_str("/tmp/a.ini", text);
    assert!(matches!(
        result,
        Err(ConfigError::MissingReference { ref reference, ref option, .. })
            if reference == "name" && option == "log"
    ));
}

#[test]
fn test_circular_reference_is_too_deep() {
    let result = ConfigLoader::load_str("/tmp/a.ini", "[a]\nx = %(y)s\ny = %(x)s\n");
    assert!(matches!(result, Err(ConfigError::InterpolationDepth { .. })));
}

#[test]
fn test_bad_syntax_is_reported() {
    let result = ConfigLoader::load_str("/tmp/a.ini", "[a]\nx = 1\ny = %(x)s at 50%\n");
    match result {
        Err(err @ ConfigError::InterpolationSyntax { .. }) => assert!(err.is_interpolation()),
        other => panic!("expected InterpolationSyntax, got {other:?}"),
    }
}

#[test]
fn test_date_formats_without_references_are_verbatim() {
    let resolver =
        ConfigLoader::load_str("/tmp/a.ini", "[a]\nfmt = %Y-%m-%d %H:%M:%S\n").unwrap();
    assert_eq!(
        resolver.document().section("a").unwrap().properties.get("fmt"),
        Some("%Y-%m-%d %H:%M:%S")
    );
}
