use std::iter::FusedIterator;

use super::PayloadFragmenter;
use crate::frame::FrameFactory;

/// Iterator over the remaining frames of a bound message.
///
/// Created by [`PayloadFragmenter::drain`]. Yields nothing once the bound
/// message is exhausted.
#[derive(Debug)]
pub struct Drain<'a, F> {
    fragmenter: &'a mut PayloadFragmenter<F>,
}

impl<'a, F: FrameFactory> Drain<'a, F> {
    pub(super) fn new(fragmenter: &'a mut PayloadFragmenter<F>) -> Self { Self { fragmenter } }
}

impl<F: FrameFactory> Iterator for Drain<'_, F> {
    type Item = F::Frame;

    fn next(&mut self) -> Option<Self::Item> { self.fragmenter.next_frame().ok() }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.fragmenter.frame_count_hint();
        (remaining, Some(remaining))
    }
}

impl<F: FrameFactory> ExactSizeIterator for Drain<'_, F> {}

impl<F: FrameFactory> FusedIterator for Drain<'_, F> {}
