use crate::crypto::rc5::WordSize;

/// Standard RC5 key setup: load the key into little-endian words `L`, seed
/// `S` from the magic constants and mix both for `3 * max(c, t)` steps.
pub fn expand_key(word: WordSize, rounds: usize, key: &[u8]) -> Vec<u64> {
    let u = word.bytes();
    let c = key.len().div_ceil(u).max(1);
    let t = 2 * (rounds + 1);

    let mut l = vec![0u64; c];
    for (i, &byte) in key.iter().enumerate().rev() {
        l[i / u] = word.add(word.rotl(l[i / u], 8), byte as u64);
    }

    let (p, q) = word.magic();
    let mut s = Vec::with_capacity(t);
    s.push(p);
    for i in 1..t {
        s.push(word.add(s[i - 1], q));
    }

    let (mut a, mut b) = (0u64, 0u64);
    let (mut i, mut j) = (0usize, 0usize);
    for _ in 0..3 * c.max(t) {
        a = word.rotl(word.add(word.add(s[i], a), b), 3);
        s[i] = a;
        let ab = word.add(a, b);
        b = word.rotl(word.add(l[j], ab), ab);
        l[j] = b;
        i = (i + 1) % t;
        j = (j + 1) % c;
    }

    s
}
