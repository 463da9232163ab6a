use bson::{Bson, doc};
use dyn_codec::ops::BsonOps;
use dyn_codec::{BOOL, Codec, DOUBLE, INT, LONG, STRING, map, record, try_record};
use indexmap::IndexMap;
use log as _;
use proptest as _;
use serde_json as _;
use thiserror as _;

#[derive(Debug, Clone, PartialEq)]
struct Profile {
    user: i64,
    name: String,
    level: i32,
    scores: Vec<f64>,
    flags: IndexMap<String, bool>,
}

fn profile_codec() -> impl Codec<Target = Profile> {
    record(
        (
            LONG.field_of("user", |p: &Profile| p.user),
            STRING.field_ref("name", |p: &Profile| &p.name),
            INT.field_of("level", |p: &Profile| p.level),
            DOUBLE.list().field_ref("scores", |p: &Profile| &p.scores),
            map(STRING, BOOL).field_ref("flags", |p: &Profile| &p.flags),
        ),
        |user, name, level, scores, flags| Profile {
            user,
            name,
            level,
            scores,
            flags,
        },
    )
}

fn profile() -> Profile {
    Profile {
        user: 1_234_567_890_123,
        name: "steph".to_owned(),
        level: 12,
        scores: vec![0.5, 2.0],
        flags: IndexMap::from([("beta".to_owned(), true)]),
    }
}

#[test]
fn encodes_typed_document() {
    let value = profile_codec()
        .encode(&BsonOps, &profile())
        .expect("must encode");

    let expected = doc! {
        "user": 1_234_567_890_123i64,
        "name": "steph",
        "level": 12i32,
        "scores": [0.5, 2.0],
        "flags": { "beta": true },
    };

    assert_eq!(value, Bson::Document(expected), "fields with their bson types");
}

#[test]
fn decodes_either_int_width() {
    let input = doc! {
        "user": 5i32,
        "name": "n",
        "level": 7i64,
        "scores": [1i32, 1.5],
        "flags": {},
    };

    let profile = profile_codec()
        .decode(&BsonOps, &Bson::Document(input))
        .expect("must decode");
    assert_eq!(profile.user, 5, "int32 widens to long");
    assert_eq!(profile.level, 7, "fitting int64 narrows to int");
    assert_eq!(profile.scores, [1.0, 1.5], "int32 reads as double");
}

#[test]
fn oversized_int_fails() {
    let mut input = match profile_codec().encode(&BsonOps, &profile()) {
        Ok(Bson::Document(doc)) => doc,
        other => panic!("expected a document, got {other:?}"),
    };

    input.insert("level", i64::MAX);
    let err = profile_codec()
        .decode(&BsonOps, &Bson::Document(input))
        .expect_err("level does not fit");
    assert_eq!(err.message(), "Expected integer", "int error");
}

#[test]
fn round_trip() {
    let codec = profile_codec();
    let value = codec.encode(&BsonOps, &profile()).expect("must encode");
    assert_eq!(codec.decode(&BsonOps, &value).ok(), Some(profile()), "must round trip");
}

#[derive(Debug, PartialEq)]
struct Span {
    start: i32,
    end: i32,
}

#[test]
fn validated_record() {
    let codec = try_record(
        (
            INT.field_of("start", |s: &Span| s.start),
            INT.field_of("end", |s: &Span| s.end),
        ),
        |start: i32, end: i32| {
            if start <= end {
                Ok(Span { start, end })
            } else {
                Err(dyn_codec::Error::new(format!("Invalid span: {start}..{end}")))
            }
        },
    );

    let ok = codec.decode(&BsonOps, &Bson::Document(doc! { "start": 1, "end": 3 }));
    assert_eq!(ok.ok(), Some(Span { start: 1, end: 3 }), "valid span");

    let err = codec
        .decode(&BsonOps, &Bson::Document(doc! { "start": 3, "end": 1 }))
        .expect_err("invalid span");
    assert_eq!(err.message(), "Invalid span: 3..1", "constructor error");
}

#[test]
fn int_keys_are_dropped() {
    let codec = map(INT, STRING);
    let value = codec
        .encode(&BsonOps, &IndexMap::from([(1, "a".to_owned())]))
        .expect("must encode");
    assert_eq!(value, Bson::Document(doc! {}), "documents only have string keys");
}
