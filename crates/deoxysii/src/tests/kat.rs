// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Known-answer tests, run against every backend available on this CPU.

use deoxysii_util::hex_to_bytes;

use super::support::instances;

struct Vector {
    key: &'static str,
    nonce: &'static str,
    ad: &'static str,
    plaintext: &'static str,
    sealed: &'static str,
}

/// Published Deoxys-II-256-128 test vectors (ciphertext || tag).
const PUBLISHED: [Vector; 8] = [
    Vector {
        key: "101112131415161718191a1b1c1d1e1f202122232425262728292a2b2c2d2e2f",
        nonce: "202122232425262728292a2b2c2d2e",
        ad: "",
        plaintext: "",
        sealed: "2b97bd77712f0cde975309959dfe1d7c",
    },
    Vector {
        key: "101112131415161718191a1b1c1d1e1f202122232425262728292a2b2c2d2e2f",
        nonce: "202122232425262728292a2b2c2d2e",
        ad: "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
        plaintext: "",
        sealed: "54708ae5565a71f147bdb94d7ba3aed7",
    },
    Vector {
        key: "101112131415161718191a1b1c1d1e1f202122232425262728292a2b2c2d2e2f",
        nonce: "202122232425262728292a2b2c2d2e",
        ad: concat!(
            "f495c9c03d29989695d98ff5d430650125805c1e0576d06f26cbda42b1f82238",
            "b8",
        ),
        plaintext: "",
        sealed: "3277689dc4208cc1ff59d15434a1baf1",
    },
    Vector {
        key: "101112131415161718191a1b1c1d1e1f202122232425262728292a2b2c2d2e2f",
        nonce: "202122232425262728292a2b2c2d2e",
        ad: "",
        plaintext: "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
        sealed: concat!(
            "9da20db1c2781f6669257d87e2a4d9be1970f7581bef2c995e1149331e5e8cc1",
            "92ce3aec3a4b72ff9eab71c2a93492fa",
        ),
    },
    Vector {
        key: "101112131415161718191a1b1c1d1e1f202122232425262728292a2b2c2d2e2f",
        nonce: "202122232425262728292a2b2c2d2e",
        ad: "",
        plaintext: concat!(
            "15cd77732f9d0c4c6e581ef400876ad9188c5b8850ebd38224da95d7cdc99f7a",
            "cc",
        ),
        sealed: concat!(
            "e5ffd2abc5b459a73667756eda6443ede86c0883fc51dd75d22bb14992c68461",
            "8c5fa78d57308f19d0252072ee39df5ecc",
        ),
    },
    Vector {
        key: "101112131415161718191a1b1c1d1e1f202122232425262728292a2b2c2d2e2f",
        nonce: "202122232425262728292a2b2c2d2e",
        ad: "000102030405060708090a0b0c0d0e0f",
        plaintext: "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
        sealed: concat!(
            "109f8a168b36dfade02628a9e129d5257f03cc7912aefa79729b67b186a2b08f",
            "6549f9bf10acba0a451dbb2484a60d90",
        ),
    },
    Vector {
        key: "101112131415161718191a1b1c1d1e1f202122232425262728292a2b2c2d2e2f",
        nonce: "202122232425262728292a2b2c2d2e",
        ad: "000102030405060708090a0b0c0d0e0f10",
        plaintext: concat!(
            "422857fb165af0a35c03199fb895604dca9cea6d788954962c419e0d5c225c03",
            "27",
        ),
        sealed: concat!(
            "7d772203fa38be296d8d20d805163130c69aba8cb16ed845c2296c61a8f34b39",
            "4e0b3f10e3933c78190b24b33008bf80e9",
        ),
    },
    Vector {
        key: "101112131415161718191a1b1c1d1e1f202122232425262728292a2b2c2d2e2f",
        nonce: "202122232425262728292a2b2c2d2e",
        ad: concat!(
            "3290bb8441279dc6083a43e9048c3dc08966ab30d7a6b35759e7a13339f12491",
            "8f3b5ab1affa65e6c0e3680eb33a6ec82424ab1ce5a40b8654e13d845c29b138",
            "96a1466a75fc875acba4527ded37ed00c600a357c9a6e586c74cf3d85cd3258c",
            "813218f319d12b82480e5124ff19ec00bda1fbb8bd25eeb3de9fcbf3296deba2",
            "50caf7e9f4ef0be1918e24221dd0be888c59c166ad761d7b58462a1b1d44b042",
            "65b45827172c133dd5b6c870b9af7b21368d12a88f4efa1751047543d584382d",
            "9ec22e7550d50ecddba27d1f65453f1f3398de54ee8c1f4ac8e16f5523d89641",
            "e99a632380af0f0b1e6b0e192ec29bf1d8714978ff9fbfb93604142393e9a82c",
            "3aaebbbe15e3b4e5cfd18bdfe309315c9f9f830deebe2edcdc24f8eca90fda49",
            "f6646e789c5041fb5be933fa843278e95f3a54f8eb41f14777ea949d5ea442b0",
            "1249e64816151a325769e264ed4acd5c3f21700ca755d5bc0c2c5f9453419510",
            "bc74f2d71621dcecb9efc9c24791b4bb560fb70a8231521d6560af89d8d50144",
            "d9c080863f043781153bcd59030e60bd17a6d7aa083211b67b581fa4f74cce4d",
            "030d1e8f9429fd725c110040d41eb6989ffb1595c72cbe3c9b78a8ab80d71a6a",
            "5283da77b89cae295bb13c14fbe466b617f4da8ad60b085e2ea153f6713ae004",
            "6aa31e0ba44e43ef36a111bf05c073a4e3624cd35f63a546f9142b35aa81b882",
            "6d",
        ),
        plaintext: concat!(
            "83dab23b1379e090755c99079cfe918cb737e989f2d720ccaff493a744927644",
            "fec3653211fa75306a83486e5c34ecfe63870c97251a73e4b9033ae374809711",
            "b211ed5d293a592e466a81170f1d85750b5ca025ccd4579947edbae9ec132bfb",
            "1a7233ad79fae30006a6699f143893861b975226ed9d3cfb8a240be232fbf4e8",
            "3755d59d20bc2faa2ea5e5b0428427485cca5e76a89fe32bdd59ab4177ad7cb1",
            "899c101e3c4f7535129591390ebdf30140846078b13867bbb2efd6cf434afe35",
            "6eb18d716b21fd664c26c908496534bf2cde6d6b897799016594fb6d9f830ae5",
            "f44ccec26d42ff0d1a21b80cdbe8c8c170a5f766fad884abcc781b5b8ebc0f55",
            "9bfeaa4557b04d977d51411a7f47bf437d0280cf9f92bc4f9cd6226337a49232",
            "0851955adae2cafea22a89c3132dd252e4728328eda05555dff3241404341b8a",
            "a502d45c456113af42a8e91a85e4b4e9555028982ec3d144722af0eb04a6d3b8",
            "127c3040629de53f5fd187048198e8f8e8cc857afcbae45c693fec12fc2149d5",
            "e7587d0121b1717d0147f6979f75e8f085293f705c3399a6cc8df7057bf481e6",
            "c374edf0a0af7479f858045357b7fe21021c3fabdaf012652bf2e5db257bd949",
            "0ce637a81477bd3f9814a2198fdb9afa9344321f2393798670e588c47a1924d5",
            "92cda3eb5a96754dfd92d87ee1ffa9d4ee586c85d7518c5d2db57d0451c33de0",
        ),
        sealed: concat!(
            "88294fcef65a1bdfd7baaa472816c64ef5bef2622b88c1ec5a739396157ef493",
            "5f3aa76449e391c32da28ee2857f399ac3dd95aed30cfb26cc0063cd4cd8f743",
            "1108176fbf370123856662b000a8348e5925fbb97c9ec0c737758330a7983f06",
            "b51590c1d2f5e5faaf0eb58e34e19e5fc85cec03d3926dd46a79ba7026e83dec",
            "24e07484c9103dd0cdb0edb505500caca5e1d5dbc71348cf00648821488ebaab",
            "7f9d84bbbf91b3c521dbef30110e7bd94f8dad5ab8e0cc5411ca9682d210d5d8",
            "0c0c4bdbba8181789a4273d6deb80899fdcd976ca6f3a9770b54305f586a0425",
            "6cfbeb4c11254e88559f294db3b9a94b80ab9f9a02cb4c0748de0af781868552",
            "1691dba5738be546dba13a56016fb8635af9dff50f25d1b17ad21707db2640a7",
            "6a741e65e559b2afaaec0f37e18436bf02008f84dbd7b2698687a22376b65dc7",
            "524fca8a28709eee3f3caee3b28ed1173d1e08ee849e2ca63d2c90d555755c8f",
            "bafd5d2f4b37f06a1dbd6852ee2ffcfe79d510152e98fc4f3094f740a4aede9e",
            "e378b606d34576776bf5f1269f5385a84b3928433bfca177550ccfcd22cd0331",
            "bbc595e38c2758b2662476fa66354c4e84c7b360405aa3f5b2a48621bdca1a90",
            "c69b21789c91b5b8c568e3c741d99e22f6d7e26f2abed045f1d578b782ab4a5c",
            "f2af636d842b3012e180e4b045d8d15b057b69c92398a517053daf9be7c2935e",
            "a616f0c218e18b526cf2a3f8c115e262",
        ),
    },
];

/// Key `00..1f`, nonce `00..0e`, and `ad == plaintext == 00..(len - 1)`.
/// The lengths straddle every 4/2/1 batch boundary and the padded final block.
const SEQUENTIAL: [(usize, &str); 14] = [
    (
        0,
        "dcc129c2117dd2ff98613e72ff9d3801",
    ),
    (
        1,
        "32ba68690776d3b3da53c545b62a79b530",
    ),
    (
        15,
        "f6c82d9c7285f4cc36784328680c14a9f584d352a2b11051d0b9a06f590beb",
    ),
    (
        16,
        "4a6d2632ef281f9f378ed48432d0747ae8a251013561d0304d8e7ec6afb03e69",
    ),
    (
        17,
        concat!(
            "2c64eabda645862f245706f887d0bc676b7d9758a303a0fec153f6fcfe7457b5",
            "96",
        ),
    ),
    (
        31,
        concat!(
            "f8f236e04a702100f1b586874ef192e2ae37539cc0987bf7f3c290eb04af3e97",
            "2760f7a6df008d9ce04c07b7466668",
        ),
    ),
    (
        32,
        concat!(
            "a3a6b8bd1f9dd8e3ea384991b92a93eb652a6961c8215bdb5cfbbe601d9be61b",
            "0fb134a09b9b8416712a7096702102ac",
        ),
    ),
    (
        33,
        concat!(
            "9becf82ba53a7fdd26e0a52ef6b19969e6c88e812c88c695c7d5987d9fc01b9e",
            "2b6f92d2e4b6e362653aedd0ae4980b6fe",
        ),
    ),
    (
        63,
        concat!(
            "2ff8ad0ec3a4cc47172aa11b05c732d5b050b23cf2d7a38b2ecac14995f6769a",
            "3ffc069aab50db7f5c8c74b51a1b11d1270fcba98ad8d2e10bb6ea941a5f9298",
            "81553debf1b7cf44c68f91050c9ffa",
        ),
    ),
    (
        64,
        concat!(
            "dcb7643015921e465a81baca318f4a9911407baa8134e798e28ec520daf1adad",
            "b0c659cdf64ad7ff703ff9b26cf4ac714fd61ab9b0319213fdf30b91fc1b8ab4",
            "83aeb0b6bc5ebcf92a95652ec847079a",
        ),
    ),
    (
        65,
        concat!(
            "06b802802cdd951ac179ed3350e59e267f9c47f22d4c7b371c32cff9c17f16f8",
            "26dcbb91d7a68ea1398706ae5d63249115bfaa4777bc10b479cd640985505a38",
            "58f27060451d09e076b59e01bd3d377698",
        ),
    ),
    (
        127,
        concat!(
            "25c471745f56813305958d5865bed04d2bfc737d0f2179a31f217c0a32c9de58",
            "a050c735dc36b56846e92f77e8e7054465194dbdfe36427aa7fe172688534e48",
            "8c8a877b2ece4e31853005f5d0bbca47893035aa05ab536dfe22dc0d54c0f00d",
            "589eb3a81061a598a3a142196a02eb9c1c9241dd31de9292b4d448636386d449",
            "c31c1a8f3163adf41364dad2cfe440",
        ),
    ),
    (
        128,
        concat!(
            "edb0b72e5e69d38e919113a2a29478be5e66e933a5f13710c229ab65167b4e20",
            "77b72c94c1c89aa39a350caf8ae771068298b53db5e52535686eeb7ce45c29de",
            "a10e2ddb6165e96da701e214d06276c3fbd85db3564bfbe616ac40b2453ae98a",
            "4d24b64a8f04f1c7538375db4a939ceb03b4c5e01a4e867910f7485b2ce3c2a1",
            "1c3185e48c5523043030aa0477603c65",
        ),
    ),
    (
        129,
        concat!(
            "861c1f06bfa0fecc3f609502a2d5a62e3724ff5154ac229d248c64d83226a0b0",
            "7c2fc1ac073ee00cb00934429cfe13618810ce88598bc3a613d70179664fba47",
            "132ebeee92078f83192f4d97d54dee50eee2756e41405893ee998683ada950d6",
            "9265b6c0af577c7821f5436c1f8b0b71c97eadd46b648bc76de2efda8eac546b",
            "0cc15da821abcd14f776d3e9f502cfc9f1",
        ),
    ),
];

fn sequential(len: usize) -> Vec<u8> {
    (0..len).map(|i| i as u8).collect()
}

// =============================================================================
// Published vectors
// =============================================================================

#[test]
fn test_published_vectors_seal() {
    for (i, vector) in PUBLISHED.iter().enumerate() {
        let nonce = hex_to_bytes(vector.nonce);
        let ad = hex_to_bytes(vector.ad);
        let plaintext = hex_to_bytes(vector.plaintext);
        let expected = hex_to_bytes(vector.sealed);

        for aead in instances(&hex_to_bytes(vector.key)) {
            let sealed = aead
                .seal(&nonce, &plaintext, &ad)
                .expect("Failed to seal(..)");
            assert_eq!(sealed, expected, "vector {i}, backend {}", aead.backend_name());
        }
    }
}

#[test]
fn test_published_vectors_open() {
    for (i, vector) in PUBLISHED.iter().enumerate() {
        let nonce = hex_to_bytes(vector.nonce);
        let ad = hex_to_bytes(vector.ad);
        let plaintext = hex_to_bytes(vector.plaintext);
        let sealed = hex_to_bytes(vector.sealed);

        for aead in instances(&hex_to_bytes(vector.key)) {
            let opened = aead.open(&nonce, &sealed, &ad).expect("Failed to open(..)");
            assert_eq!(opened, plaintext, "vector {i}, backend {}", aead.backend_name());
        }
    }
}

// =============================================================================
// Batch boundaries
// =============================================================================

#[test]
fn test_sequential_vectors() {
    let key = sequential(32);
    let nonce = sequential(15);

    for aead in instances(&key) {
        for (len, hex) in SEQUENTIAL {
            let msg = sequential(len);
            let expected = hex_to_bytes(hex);

            let sealed = aead.seal(&nonce, &msg, &msg).expect("Failed to seal(..)");
            assert_eq!(sealed, expected, "len {len}, backend {}", aead.backend_name());

            let opened = aead.open(&nonce, &sealed, &msg).expect("Failed to open(..)");
            assert_eq!(opened, msg, "len {len}, backend {}", aead.backend_name());
        }
    }
}

#[test]
fn test_ad_and_message_of_different_lengths() {
    let key = sequential(32);
    let nonce = sequential(15);
    let expected = hex_to_bytes(concat!(
        "3ade629d813be134bd37aefde68ade3b2e4d032d9364a088ab3e0553ec1daecd",
        "63bc0bd0bc13bf74226b311adefe5839640484b43b86e4c1",
    ));

    for aead in instances(&key) {
        let sealed = aead
            .seal(&nonce, &sequential(40), &sequential(5))
            .expect("Failed to seal(..)");
        assert_eq!(sealed, expected, "backend {}", aead.backend_name());
    }
}

#[test]
fn test_ad_only_produces_bare_tag() {
    let key = sequential(32);
    let nonce = sequential(15);
    let expected = hex_to_bytes("3712ad2fbb8add5e93dd32d47fac2bdd");

    for aead in instances(&key) {
        let sealed = aead
            .seal(&nonce, &[], &sequential(20))
            .expect("Failed to seal(..)");
        assert_eq!(sealed, expected, "backend {}", aead.backend_name());
    }
}
