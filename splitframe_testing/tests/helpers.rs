//! Tests for the fragmenter driving helpers.

use std::num::NonZeroUsize;

use splitframe::{PayloadFragmenter, StreamId};
use splitframe_testing::{
    FrameSummary,
    concat_sections,
    drain_request_channel,
    drain_response,
    patterned,
    reassemble,
    summarise,
};

#[test]
fn patterned_regions_are_distinguishable() {
    let payload = patterned(3, 3);
    assert_eq!(&payload.metadata()[..], &[0, 1, 2]);
    assert_eq!(&payload.data()[..], &[255, 254, 253]);
}

#[test]
fn summarise_reports_sections_and_flags() {
    let mut fragmenter = PayloadFragmenter::new(2, 3).expect("positive mtus");
    let frames = drain_request_channel(&mut fragmenter, StreamId::new(1), &patterned(3, 2), 5);

    assert_eq!(
        summarise(&frames),
        vec![
            FrameSummary {
                metadata: Some(2),
                data: Some(2),
                followed: true,
                initial_request_n: Some(5),
            },
            FrameSummary {
                metadata: Some(1),
                data: None,
                followed: false,
                initial_request_n: Some(0),
            },
        ]
    );
}

#[test]
fn concat_and_reassemble_agree() {
    let payload = patterned(17, 40);
    let mut fragmenter = PayloadFragmenter::new(4, 6).expect("positive mtus");
    let frames = drain_response(&mut fragmenter, StreamId::new(2), &payload);

    let (metadata, data) = concat_sections(&frames);
    assert_eq!(metadata.as_slice(), &payload.metadata()[..]);
    assert_eq!(data.as_slice(), &payload.data()[..]);

    let messages = reassemble(&frames, NonZeroUsize::new(128).expect("non-zero"))
        .expect("frames reassemble");
    assert_eq!(messages.len(), 1);
    assert_eq!(messages.first().map(|m| m.payload()), Some(&payload));
}
