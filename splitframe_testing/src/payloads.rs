//! Payload builders and proptest strategies.

use std::num::NonZeroUsize;

use proptest::{
    collection::vec,
    prelude::{Just, Strategy, any, prop_oneof},
};
use splitframe::Payload;

/// Build a payload whose metadata counts up from 0 and whose data counts
/// down from 255, so misplaced slices show up in assertions.
#[must_use]
pub fn patterned(metadata_len: usize, data_len: usize) -> Payload {
    let metadata: Vec<u8> = (0..metadata_len).map(|i| (i % 256) as u8).collect();
    let data: Vec<u8> = (0..data_len).map(|i| 255 - (i % 256) as u8).collect();
    Payload::new(metadata, data)
}

fn region_strategy(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        Just(Vec::<u8>::new()),
        vec(any::<u8>(), 1..=max_len.max(1)),
    ]
}

/// Payloads with independently sized, possibly empty regions.
pub fn payload_strategy(max_len: usize) -> impl Strategy<Value = Payload> {
    (region_strategy(max_len), region_strategy(max_len))
        .prop_map(|(metadata, data)| Payload::new(metadata, data))
}

/// Positive MTUs up to `max`, biased towards the boundary value 1.
pub fn mtu_strategy(max: usize) -> impl Strategy<Value = NonZeroUsize> {
    prop_oneof![Just(1usize), 1usize..=max.max(1)]
        .prop_map(|value| NonZeroUsize::new(value).expect("strategy yields positive values"))
}
