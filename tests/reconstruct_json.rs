// End-to-end reconstruction from JSON share-set documents.

use num::bigint::BigInt;
use num::traits::Zero;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use polyrecover::{reconstruct, Error, Secret, ShareCollection};

fn run(text: &str) -> Result<polyrecover::Reconstruction, Error> {
    let set = ShareCollection::from_json(text).unwrap();
    reconstruct(&set)
}

#[test]
fn sample_document() {
    let result = run(r#"{
        "keys": {"n": 4, "k": 3},
        "1": {"base": "10", "value": "4"},
        "2": {"base": "2", "value": "111"},
        "3": {"base": "10", "value": "12"},
        "6": {"base": "4", "value": "213"}
    }"#)
    .unwrap();
    assert_eq!(result.secret, Secret::Integer(BigInt::from(3)));
    assert_eq!(result.points.len(), 4);
}

#[test]
fn one_out_of_one() {
    let result = run(r#"{
        "keys": {"n": 1, "k": 1},
        "9": {"base": "16", "value": "2a"}
    }"#)
    .unwrap();
    assert_eq!(result.secret, Secret::Integer(BigInt::from(42)));
}

#[test]
fn threshold_equal_to_share_count() {
    // f(x) = x^2 + 2 at x = 1, 2, 3.
    let result = run(r#"{
        "keys": {"n": 3, "k": 3},
        "1": {"base": "10", "value": "3"},
        "2": {"base": "10", "value": "6"},
        "3": {"base": "10", "value": "11"}
    }"#)
    .unwrap();
    assert_eq!(result.secret, Secret::Integer(BigInt::from(2)));
}

#[test]
fn malformed_base_names_the_share() {
    let err = run(r#"{
        "keys": {"n": 2, "k": 2},
        "1": {"base": "10", "value": "4"},
        "2": {"base": "40", "value": "111"}
    }"#)
    .unwrap_err();
    assert_eq!(err, Error::InvalidBase { id: "2".into(), base: "40".into() });
    assert_eq!(err.share_id(), Some("2"));
}

#[test]
fn too_few_shares() {
    let err = run(r#"{
        "keys": {"n": 5, "k": 3},
        "1": {"base": "10", "value": "4"},
        "2": {"base": "10", "value": "7"}
    }"#)
    .unwrap_err();
    assert_eq!(err, Error::InsufficientPoints { have: 2, need: 3 });
}

#[test]
fn repeated_runs_agree() {
    let text = r#"{
        "keys": {"n": 4, "k": 3},
        "1": {"base": "10", "value": "4"},
        "2": {"base": "2", "value": "111"},
        "3": {"base": "10", "value": "12"},
        "6": {"base": "4", "value": "213"}
    }"#;
    assert_eq!(run(text), run(text));
}

// Render v in `base`, matching the decoder's alphabet.
fn encode(v: &BigInt, base: u64) -> String {
    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if v.is_zero() {
        return "0".to_string();
    }
    let mut v = v.clone();
    let big_base = BigInt::from(base);
    let mut out = Vec::new();
    while !v.is_zero() {
        let digit = usize::try_from(&v % &big_base).unwrap();
        out.push(ALPHABET[digit]);
        v /= &big_base;
    }
    out.reverse();
    String::from_utf8(out).unwrap()
}

fn random_combination(rng: &mut StdRng, n: usize, k: usize) {
    // A random degree-(k-1) polynomial with a known constant term,
    // shared as n points encoded in assorted bases.
    let coeffs: Vec<BigInt> = (0..k).map(|_| BigInt::from(rng.gen::<u32>())).collect();
    let secret = coeffs.last().unwrap().clone();

    let mut doc = format!(r#"{{"keys":{{"n":{},"k":{}}}"#, n, k);
    for x in 1..=n {
        let big_x = BigInt::from(x);
        let y = coeffs
            .iter()
            .fold(BigInt::zero(), |acc, c| acc * &big_x + c);
        let base = rng.gen_range(2..=36u64);
        doc.push_str(&format!(
            r#","{}":{{"base":"{}","value":"{}"}}"#,
            x,
            base,
            encode(&y, base)
        ));
    }
    doc.push('}');

    let result = run(&doc).unwrap();
    assert_eq!(result.secret, Secret::Integer(secret));
    assert_eq!(result.points.len(), n);
}

#[test]
fn random_share_sets_round_trip() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..10 {
        random_combination(&mut rng, 5, 3);
        random_combination(&mut rng, 3, 3);
        random_combination(&mut rng, 10, 1);
    }
}
