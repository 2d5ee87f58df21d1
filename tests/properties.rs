//! Property tests for reconstruction, continuation flags and demand placement.

use std::num::NonZeroUsize;

use proptest::{prelude::*, test_runner::Config as ProptestConfig};
use splitframe::{FragmenterConfig, Payload, PayloadFragmenter, StreamId};
use splitframe_testing::{
    concat_sections,
    drain_request_channel,
    drain_response,
    mtu_strategy,
    payload_strategy,
    reassemble,
    summarise,
};

const MAX_REGION: usize = 300;
const MAX_MTU: usize = 64;

fn fragmenter(metadata_mtu: NonZeroUsize, data_mtu: NonZeroUsize) -> PayloadFragmenter {
    PayloadFragmenter::from_config(FragmenterConfig::from_non_zero(metadata_mtu, data_mtu))
}

fn expected_frames(payload: &Payload, metadata_mtu: NonZeroUsize, data_mtu: NonZeroUsize) -> usize {
    payload
        .metadata()
        .len()
        .div_ceil(metadata_mtu.get())
        .max(payload.data().len().div_ceil(data_mtu.get()))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn sections_reconstruct_both_regions(
        payload in payload_strategy(MAX_REGION),
        metadata_mtu in mtu_strategy(MAX_MTU),
        data_mtu in mtu_strategy(MAX_MTU),
    ) {
        let mut fragmenter = fragmenter(metadata_mtu, data_mtu);
        let frames = drain_response(&mut fragmenter, StreamId::new(1), &payload);

        let (metadata, data) = concat_sections(&frames);
        prop_assert_eq!(metadata.as_slice(), &payload.metadata()[..]);
        prop_assert_eq!(data.as_slice(), &payload.data()[..]);
        prop_assert_eq!(frames.len(), expected_frames(&payload, metadata_mtu, data_mtu));

        for frame in &frames {
            prop_assert!(frame.metadata().is_none_or(|m| !m.is_empty() && m.len() <= metadata_mtu.get()));
            prop_assert!(frame.data().is_none_or(|d| !d.is_empty() && d.len() <= data_mtu.get()));
        }
    }

    #[test]
    fn only_the_last_frame_clears_the_continuation_bit(
        payload in payload_strategy(MAX_REGION),
        metadata_mtu in mtu_strategy(MAX_MTU),
        data_mtu in mtu_strategy(MAX_MTU),
    ) {
        let mut fragmenter = fragmenter(metadata_mtu, data_mtu);
        let frames = drain_response(&mut fragmenter, StreamId::new(2), &payload);

        let followed: Vec<bool> = summarise(&frames).iter().map(|s| s.followed).collect();
        if let Some((last, rest)) = followed.split_last() {
            prop_assert!(!last);
            prop_assert!(rest.iter().all(|&f| f));
        } else {
            prop_assert!(payload.is_empty());
        }
    }

    #[test]
    fn demand_is_carried_by_the_first_frame_only(
        payload in payload_strategy(MAX_REGION),
        metadata_mtu in mtu_strategy(MAX_MTU),
        data_mtu in mtu_strategy(MAX_MTU),
        demand in 1..=i32::MAX,
    ) {
        let mut fragmenter = fragmenter(metadata_mtu, data_mtu);
        let frames = drain_request_channel(&mut fragmenter, StreamId::new(3), &payload, demand);

        let demands: Vec<Option<u32>> = summarise(&frames).iter().map(|s| s.initial_request_n).collect();
        if let Some((first, rest)) = demands.split_first() {
            prop_assert_eq!(*first, u32::try_from(demand).ok());
            prop_assert!(rest.iter().all(|d| *d == Some(0)));
        }
    }

    #[test]
    fn rebinding_starts_a_fresh_drain(
        first in payload_strategy(MAX_REGION),
        second in payload_strategy(MAX_REGION),
        metadata_mtu in mtu_strategy(MAX_MTU),
        data_mtu in mtu_strategy(MAX_MTU),
        abandon_after in 0usize..4,
    ) {
        let mut reused = fragmenter(metadata_mtu, data_mtu);
        reused.bind_for_response(StreamId::new(4), &first);
        let _ = reused.drain().take(abandon_after).count();
        let reused_frames = drain_response(&mut reused, StreamId::new(5), &second);

        let mut fresh = fragmenter(metadata_mtu, data_mtu);
        let fresh_frames = drain_response(&mut fresh, StreamId::new(5), &second);

        prop_assert_eq!(reused_frames, fresh_frames);
    }

    #[test]
    fn reassembler_recovers_the_payload(
        payload in payload_strategy(MAX_REGION),
        metadata_mtu in mtu_strategy(MAX_MTU),
        data_mtu in mtu_strategy(MAX_MTU),
    ) {
        prop_assume!(!payload.is_empty());
        let mut fragmenter = fragmenter(metadata_mtu, data_mtu);
        let frames = drain_response(&mut fragmenter, StreamId::new(6), &payload);

        let limit = NonZeroUsize::new(2 * MAX_REGION).expect("non-zero");
        let messages = reassemble(&frames, limit).expect("frames reassemble");
        prop_assert_eq!(messages.len(), 1);
        prop_assert_eq!(messages.first().map(|m| m.payload()), Some(&payload));
    }
}
