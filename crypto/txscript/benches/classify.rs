use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::StdRng};
use scriptkit_txscript::{
    classify, multisig_redeem_script, null_data, pay_to_pub_key, pay_to_pub_key_hash, pay_to_script_hash_script,
    pay_to_witness_pub_key_hash, pay_to_witness_script_hash_script, Script,
};
use secp256k1::{PublicKey, Secp256k1, SecretKey};

fn standard_scripts() -> Vec<(&'static str, Script)> {
    let secp = Secp256k1::new();
    let mut rng = StdRng::seed_from_u64(42);
    let mut keys: Vec<Vec<u8>> = (0..3)
        .map(|_| PublicKey::from_secret_key(&secp, &SecretKey::new(&mut rng)).serialize().to_vec())
        .collect();
    let hash: [u8; 20] = rng.r#gen();
    let multisig = multisig_redeem_script(&mut keys, 2).unwrap();

    vec![
        ("pubkey", pay_to_pub_key(&keys[0]).unwrap()),
        ("pubkeyhash", pay_to_pub_key_hash(&hash).unwrap()),
        ("multisig", multisig.clone()),
        ("scripthash", pay_to_script_hash_script(multisig.as_bytes()).unwrap()),
        ("witnesspubkeyhash", pay_to_witness_pub_key_hash(&hash).unwrap()),
        ("witnessscripthash", pay_to_witness_script_hash_script(multisig.as_bytes()).unwrap()),
        ("nulldata", null_data(b"scriptkit").unwrap()),
        ("nonstandard", Script::from_slice(&[0x51, 0x52, 0x93, 0x53, 0x87])),
    ]
}

fn benchmark_classify(c: &mut Criterion) {
    let scripts = standard_scripts();

    let mut group = c.benchmark_group("classify");
    for (name, script) in scripts.iter() {
        group.bench_function(*name, |b| b.iter(|| classify(black_box(script.as_bytes()))));
    }
    group.finish();
}

fn benchmark_decompile(c: &mut Criterion) {
    let scripts = standard_scripts();
    let (_, multisig) = &scripts[2];

    c.bench_function("decompile_multisig", |b| b.iter(|| scriptkit_txscript::decompile(black_box(multisig.as_bytes())).unwrap()));
}

criterion_group!(benches, benchmark_classify, benchmark_decompile);
criterion_main!(benches);
