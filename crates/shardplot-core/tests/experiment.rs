#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use shardplot_core::method::{CrossShardProtocol, Method};
use shardplot_core::sharding::{addr_to_shard, classify_tx, TxKind};

#[test]
fn method_labels() {
    let names: Vec<&str> = (0u8..=3)
        .map(|c| Method::try_from(c).unwrap().display_name())
        .collect();
    assert_eq!(names, ["Broker", "CLPA", "Broker", "Monoxide"]);

    let err = Method::try_from(4).expect_err("must fail");
    assert_eq!(err.code().as_str(), "CONFIG");

    for m in [Method::Broker, Method::Clpa, Method::BrokerChain, Method::Monoxide] {
        assert_eq!(Method::try_from(m.code()).unwrap(), m);
    }
}

#[test]
fn method_protocols() {
    assert_eq!(Method::Broker.cross_shard_protocol(), CrossShardProtocol::Broker);
    assert_eq!(Method::BrokerChain.cross_shard_protocol(), CrossShardProtocol::Broker);
    assert_eq!(Method::Clpa.cross_shard_protocol(), CrossShardProtocol::Relay);
    assert_eq!(Method::Monoxide.cross_shard_protocol(), CrossShardProtocol::Relay);
}

#[test]
fn shard_uses_low_32_bits() {
    // last 8 hex digits: 0x00000007
    assert_eq!(addr_to_shard("0xabcdef0100000007", 4).unwrap(), 3);
    assert_eq!(addr_to_shard("abcdef0100000007", 4).unwrap(), 3);
    // short address uses all digits
    assert_eq!(addr_to_shard("0x1f", 16).unwrap(), 15);
    assert_eq!(addr_to_shard("ffffffff", 1).unwrap(), 0);
    assert_eq!(
        addr_to_shard("0x32be343b94f860124dc4fee278fdcbd38c102d88", 32).unwrap(),
        0x8c102d88 % 32
    );
}

#[test]
fn shard_rejects_bad_input() {
    assert_eq!(
        addr_to_shard("0xzz", 4).unwrap_err().code().as_str(),
        "INVALID_ADDRESS"
    );
    assert_eq!(
        addr_to_shard("0x", 4).unwrap_err().code().as_str(),
        "INVALID_ADDRESS"
    );
    assert_eq!(
        addr_to_shard("0x+0000001", 4).unwrap_err().code().as_str(),
        "INVALID_ADDRESS"
    );
    assert_eq!(addr_to_shard("0x01", 0).unwrap_err().code().as_str(), "CONFIG");
}

#[test]
fn classify_itx_ctx() {
    assert_eq!(classify_tx("0x10000004", "0x20000008", 4).unwrap(), TxKind::Intra);
    assert_eq!(classify_tx("0x10000004", "0x20000009", 4).unwrap(), TxKind::Cross);
    assert_eq!(classify_tx("0x10000004", "0x20000009", 1).unwrap(), TxKind::Intra);
}
