//! End-to-end fragmentation scenarios driven through the public API.

use rstest::rstest;
use splitframe::{
    ConfigError,
    FragmenterConfig,
    FragmenterError,
    FrameFlags,
    FrameType,
    Payload,
    PayloadFragmenter,
    StreamId,
};
use splitframe_testing::{
    FrameSummary,
    concat_sections,
    drain_request_channel,
    drain_response,
    patterned,
    summarise,
};

fn summary(
    metadata: Option<usize>,
    data: Option<usize>,
    followed: bool,
    initial_request_n: Option<u32>,
) -> FrameSummary {
    FrameSummary {
        metadata,
        data,
        followed,
        initial_request_n,
    }
}

#[rstest]
#[case::mixed_regions(10, 20, 15, 45, vec![
    summary(Some(10), Some(20), true, None),
    summary(Some(5), Some(20), true, None),
    summary(None, Some(5), false, None),
])]
#[case::data_only(5, 5, 0, 12, vec![
    summary(None, Some(5), true, None),
    summary(None, Some(5), true, None),
    summary(None, Some(2), false, None),
])]
#[case::metadata_only(4, 4, 9, 0, vec![
    summary(Some(4), None, true, None),
    summary(Some(4), None, true, None),
    summary(Some(1), None, false, None),
])]
#[case::exact_fit(8, 8, 8, 8, vec![summary(Some(8), Some(8), false, None)])]
#[case::empty(3, 3, 0, 0, vec![])]
fn response_scenarios(
    #[case] metadata_mtu: usize,
    #[case] data_mtu: usize,
    #[case] metadata_len: usize,
    #[case] data_len: usize,
    #[case] expected: Vec<FrameSummary>,
) {
    let mut fragmenter = PayloadFragmenter::new(metadata_mtu, data_mtu).expect("positive mtus");
    let payload = patterned(metadata_len, data_len);
    let frames = drain_response(&mut fragmenter, StreamId::new(1), &payload);

    assert_eq!(summarise(&frames), expected);
    let (metadata, data) = concat_sections(&frames);
    assert_eq!(metadata.as_slice(), &payload.metadata()[..]);
    assert_eq!(data.as_slice(), &payload.data()[..]);
}

#[test]
fn request_channel_scenario_carries_demand_once() {
    let mut fragmenter = PayloadFragmenter::new(10, 10).expect("positive mtus");
    let frames = drain_request_channel(&mut fragmenter, StreamId::new(7), &patterned(3, 30), 64);

    assert_eq!(
        summarise(&frames),
        vec![
            summary(Some(3), Some(10), true, Some(64)),
            summary(None, Some(10), true, Some(0)),
            summary(None, Some(10), false, Some(0)),
        ]
    );
    assert!(
        frames
            .iter()
            .all(|frame| frame.frame_type() == FrameType::RequestChannel)
    );
    let first = frames.first().expect("at least one frame");
    assert!(first.flags().contains(FrameFlags::METADATA));
}

#[test]
fn zero_mtu_is_a_configuration_error() {
    assert_eq!(
        PayloadFragmenter::new(0, 1).map(|_| ()),
        Err(ConfigError::ZeroMetadataMtu)
    );
    assert_eq!(
        PayloadFragmenter::new(1, 0).map(|_| ()),
        Err(ConfigError::ZeroDataMtu)
    );
}

#[test]
fn fragmenter_is_reusable_across_messages() {
    let config = FragmenterConfig::new(4, 4).expect("positive mtus");
    let mut fragmenter = PayloadFragmenter::from_config(config);

    let first = drain_response(&mut fragmenter, StreamId::new(1), &patterned(0, 10));
    assert_eq!(first.len(), 3);

    let second = drain_request_channel(&mut fragmenter, StreamId::new(3), &patterned(2, 2), 1);
    assert_eq!(
        summarise(&second),
        vec![summary(Some(2), Some(2), false, Some(1))]
    );
    assert!(second.iter().all(|frame| frame.stream_id() == StreamId::new(3)));

    let third = drain_response(&mut fragmenter, StreamId::new(5), &Payload::default());
    assert!(third.is_empty());
}

#[test]
fn exhausted_sequence_is_reported() {
    let mut fragmenter = PayloadFragmenter::new(4, 4).expect("positive mtus");
    let _ = drain_response(&mut fragmenter, StreamId::new(1), &patterned(1, 1));

    assert!(!fragmenter.has_more());
    assert_eq!(fragmenter.next_frame(), Err(FragmenterError::Exhausted));
}
