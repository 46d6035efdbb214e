//! Integration tests for `#[derive(Parameters)]`.

use http::Uri;
use paramdoc_core::{ErrorKind, FieldType, ParamError, Parameters};
use paramdoc_docs::{describe_params, Schema};
use paramdoc_extract::{decode_params, ExtractionContextBuilder};
use paramdoc_macros::Parameters;
use serde_json::json;

#[derive(Debug, Default, Clone, PartialEq, Parameters)]
struct StarParams {
    #[param("name: starId; kind: path; desc: Star identifier; example: 5; schemaMin: 3")]
    star_id: i64,
    #[param("name: potato; kind: query; required: true")]
    potato: bool,
    #[param("name: Star-Name; kind: header; example: Sun")]
    star_name: String,
    #[param("name: sessionId; kind: cookie")]
    session_id: String,
    internal: String,
}

#[test]
fn test_derive_registers_fields_in_declaration_order() {
    let bindings = StarParams::bindings();
    let fields: Vec<_> = bindings
        .fields()
        .iter()
        .map(|f| (f.name(), f.field_type(), f.annotation().is_some()))
        .collect();

    assert_eq!(
        fields,
        vec![
            ("star_id", FieldType::Int, true),
            ("potato", FieldType::Bool, true),
            ("star_name", FieldType::String, true),
            ("session_id", FieldType::String, true),
            ("internal", FieldType::String, false),
        ]
    );
    assert!(bindings.fields().iter().all(|f| f.is_settable()));
}

#[test]
fn test_derived_record_decodes_request() {
    let ctx = ExtractionContextBuilder::new()
        .uri(Uri::from_static("/stars/42?potato=true&internal=leak"))
        .header("Star-Name", "Vega")
        .cookie("sessionId", "abc")
        .path_param("starId", "42")
        .build();

    let mut params = StarParams::default();
    decode_params(&mut params, &ctx).unwrap();

    assert_eq!(
        params,
        StarParams {
            star_id: 42,
            potato: true,
            star_name: "Vega".to_string(),
            session_id: "abc".to_string(),
            internal: String::new(),
        }
    );
}

#[test]
fn test_derived_record_describes_parameters() {
    let parameters = describe_params::<StarParams>().unwrap();

    assert_eq!(parameters.len(), 4);
    assert_eq!(parameters[0].name, "starId");
    assert!(parameters[0].required);
    assert_eq!(parameters[0].example, Some(json!(5)));
    assert_eq!(parameters[0].schema, Schema::integer().with_minimum(3.0));
    assert_eq!(parameters[1].schema, Schema::boolean());
    assert_eq!(parameters[2].example, Some(json!("Sun")));
    assert!(!parameters[3].required);
}

#[derive(Debug, Default, Parameters)]
struct MassParams {
    #[param("name: mass; kind: query")]
    mass: f64,
}

#[test]
fn test_annotated_unsupported_type_fails_both_pipelines() {
    let err = describe_params::<MassParams>().unwrap_err();
    assert_eq!(
        err,
        ParamError::UnsupportedType {
            field: "mass".to_string(),
            type_name: "f64".to_string(),
        }
    );

    let ctx = ExtractionContextBuilder::new()
        .uri(Uri::from_static("/?mass=1.5"))
        .build();
    let mut params = MassParams::default();
    let err = decode_params(&mut params, &ctx).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedType);
    assert!(params.mass.abs() < f64::EPSILON);
}

#[derive(Debug, Default, Parameters)]
struct Tagged {
    #[param("name: id; kind: query")]
    id: i64,
    tags: Vec<String>,
}

#[test]
fn test_unannotated_unsupported_type_is_ignored() {
    assert_eq!(describe_params::<Tagged>().unwrap().len(), 1);

    let ctx = ExtractionContextBuilder::new()
        .uri(Uri::from_static("/?id=7&tags=a"))
        .build();
    let mut params = Tagged::default();
    decode_params(&mut params, &ctx).unwrap();
    assert_eq!(params.id, 7);
    assert!(params.tags.is_empty());
}

#[derive(Debug, Default, Parameters)]
struct Wrapper<T: Default> {
    #[param("name: page; kind: query; example: 1")]
    page: i64,
    extra: T,
}

#[test]
fn test_generic_struct_derives() {
    let ctx = ExtractionContextBuilder::new()
        .uri(Uri::from_static("/?page=3"))
        .build();
    let mut params = Wrapper::<bool>::default();
    decode_params(&mut params, &ctx).unwrap();
    assert_eq!(params.page, 3);
    assert!(!params.extra);

    let parameters = describe_params::<Wrapper<u8>>().unwrap();
    assert_eq!(parameters[0].example, Some(json!(1)));
}
