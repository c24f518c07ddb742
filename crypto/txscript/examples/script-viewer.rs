use scriptkit_txscript::{classify, pay_to_script_hash_script, script_builder::ScriptBuilder, ScriptViewer};

fn main() {
    // 2-of-3 multisig redeem script over the keys of G, 2G and 3G
    let script_vec = hex::decode("52210279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f817982102c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee52102f9308a019258c31049344f85f89d5229b531c845836f99b08601f113bce036f953ae").unwrap();

    // build the script from hex
    let mut s = ScriptBuilder::new();
    s.add_ops(&script_vec).unwrap();

    // print the hexadecimal form
    println!("{}", s.hex_view(0, 30));

    // print the human readable form
    println!("{}", ScriptViewer::new(s.script()));
    println!("template: {}", classify(s.script()));

    // and the output locking to it
    let p2sh = pay_to_script_hash_script(s.script()).unwrap();
    println!("{}", ScriptViewer::new(p2sh.as_bytes()));
    println!("template: {}", p2sh.classify());
}
