use async_trait::async_trait;
use ethereum_types::{Address, U256};
use rust_decimal_macros::dec;
use std::sync::{Arc, atomic::{AtomicUsize, Ordering}};
use swaprisk_core::{error::{Error, Result}, traits::{ChainReader, RpcProvider}};
use swaprisk_engine::{OfflineChainReader, RpcChainReader};

#[derive(Clone)]
struct CountingProvider {
    calls: Arc<AtomicUsize>,
    response: Vec<u8>,
    gas_wei: U256,
    fail: bool,
}

impl CountingProvider {
    fn new(response: Vec<u8>) -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            response,
            gas_wei: U256::from(30_000_000_000u64),
            fail: false,
        }
    }

    fn failing() -> Self {
        Self { fail: true, ..Self::new(vec![]) }
    }
}

#[async_trait]
impl RpcProvider for CountingProvider {
    async fn call(&self, _to: Address, data: Vec<u8>) -> Result<Vec<u8>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        // seletor de owner()
        assert_eq!(data, vec![0x8d, 0xa5, 0xcb, 0x5b]);
        if self.fail {
            Err(Error::RpcError("execution reverted".into()))
        } else {
            Ok(self.response.clone())
        }
    }

    async fn gas_price(&self) -> Result<U256> {
        if self.fail {
            Err(Error::RpcError("fail".into()))
        } else {
            Ok(self.gas_wei)
        }
    }
}

fn address_word(address: Address) -> Vec<u8> {
    let mut out = vec![0u8; 32];
    out[12..].copy_from_slice(address.as_bytes());
    out
}

#[tokio::test]
async fn decodes_owner_word() {
    let owner = Address::repeat_byte(0xde);
    let provider = CountingProvider::new(address_word(owner));
    let calls = provider.calls.clone();
    let reader = RpcChainReader::new(provider);

    assert_eq!(reader.read_owner(Address::repeat_byte(0x01)).await, Some(owner));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn zero_owner_is_reported_as_is() {
    let reader = RpcChainReader::new(CountingProvider::new(address_word(Address::zero())));
    assert_eq!(reader.read_owner(Address::repeat_byte(0x01)).await, Some(Address::zero()));
}

#[tokio::test]
async fn reverted_call_is_unknown() {
    let reader = RpcChainReader::new(CountingProvider::failing());
    assert_eq!(reader.read_owner(Address::repeat_byte(0x01)).await, None);
    assert_eq!(reader.current_gas_price().await, None);
}

#[tokio::test]
async fn malformed_owner_response_is_unknown() {
    let reader = RpcChainReader::new(CountingProvider::new(vec![0u8; 7]));
    assert_eq!(reader.read_owner(Address::repeat_byte(0x01)).await, None);
}

#[tokio::test]
async fn gas_price_converted_to_gwei() {
    let reader = RpcChainReader::new(CountingProvider::new(vec![]));
    assert_eq!(reader.current_gas_price().await, Some(dec!(30)));

    let provider = CountingProvider { gas_wei: U256::from(1_500_000_000u64), ..CountingProvider::new(vec![]) };
    let reader = RpcChainReader::new(provider);
    assert_eq!(reader.current_gas_price().await, Some(dec!(1.5)));
}

#[tokio::test]
async fn offline_reader_knows_nothing() {
    let reader = OfflineChainReader;
    assert_eq!(reader.read_owner(Address::repeat_byte(0x01)).await, None);
    assert_eq!(reader.current_gas_price().await, None);
}
