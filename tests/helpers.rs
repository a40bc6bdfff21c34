use basen::Encoding;

pub fn compare_encode(expected: &str, target: &[u8], encoding: &Encoding) {
    assert_eq!(expected, encoding.encode(target));
}

pub fn compare_decode(expected: &str, target: &str, encoding: &Encoding) {
    assert_eq!(
        expected,
        String::from_utf8(encoding.decode(target).unwrap()).unwrap()
    );
}
