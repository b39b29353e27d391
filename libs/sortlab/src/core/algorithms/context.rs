// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Instrumented primitives shared by every algorithm body.

use std::cmp::Ordering;
use std::ops::Range;
use std::sync::Arc;
use std::time::Duration;

use super::AlgorithmId;
use crate::core::collaborators::{
    pentatonic_frequency, AudioSink, Collaborators, Frame, Palette, Renderer, COMPLETION_CHORD,
};
use crate::core::runtime::RunShared;
use crate::core::scheduling::{Pacing, BATCH_INTERVAL};
use crate::core::sequence::{Element, ElementState, Sequence};
use crate::core::{Result, SortlabError};

const SWAP_TONE: Duration = Duration::from_millis(30);
const WRITE_TONE: Duration = Duration::from_millis(20);
const SWEEP_TONE: Duration = Duration::from_millis(20);
const SWEEP_TICK: Duration = Duration::from_millis(10);
const CHORD_DURATION: Duration = Duration::from_millis(300);
/// The completion sweep emits at most this many ticks.
const SWEEP_TICKS: usize = 50;

/// An algorithm body's only access to its sequence.
///
/// Comparisons, swaps and writes are counted, rendered, voiced and followed
/// by exactly one suspension. Reads and sorted-marks are free. No lock is
/// held across a suspension.
pub struct SortContext {
    shared: Arc<RunShared>,
    algorithm: AlgorithmId,
    renderer: Arc<dyn Renderer>,
    audio: Arc<dyn AudioSink>,
    palette: Palette,
}

impl SortContext {
    pub(crate) fn new(
        shared: Arc<RunShared>,
        algorithm: AlgorithmId,
        collaborators: &Collaborators,
    ) -> Self {
        Self {
            shared,
            algorithm,
            renderer: collaborators.renderer.clone(),
            audio: collaborators.audio.clone(),
            palette: collaborators.theme.current_colors(),
        }
    }

    pub fn algorithm(&self) -> AlgorithmId {
        self.algorithm
    }

    pub fn len(&self) -> usize {
        self.shared.sequence.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Error describing a broken invariant inside the running body.
    pub fn fault(&self, message: impl Into<String>) -> SortlabError {
        SortlabError::AlgorithmFault {
            algorithm: self.algorithm,
            message: message.into(),
        }
    }

    // =========================================================================
    // Uncounted reads
    // =========================================================================

    pub fn element(&self, index: usize) -> Result<Element> {
        self.read(|seq| checked(seq.elements(), index).copied())
    }

    pub fn value(&self, index: usize) -> Result<f64> {
        self.read(|seq| checked(seq.elements(), index).map(|e| e.value))
    }

    pub fn values(&self) -> Vec<f64> {
        self.shared.sequence.lock().values()
    }

    // =========================================================================
    // Comparisons
    // =========================================================================

    /// Compare the values at `i` and `j`.
    pub async fn compare(&self, i: usize, j: usize) -> Result<Ordering> {
        let ordering = self.read(|seq| {
            let a = checked(seq.elements(), i)?.value;
            let b = checked(seq.elements(), j)?.value;
            Ok(a.total_cmp(&b))
        })?;
        self.shared.record_comparison();
        self.draw(&[i, j], &[]);
        self.suspend().await?;
        Ok(ordering)
    }

    /// `value[i] > value[j]`
    pub async fn greater(&self, i: usize, j: usize) -> Result<bool> {
        Ok(self.compare(i, j).await? == Ordering::Greater)
    }

    /// `value[i] < value[j]`
    pub async fn less(&self, i: usize, j: usize) -> Result<bool> {
        Ok(self.compare(i, j).await? == Ordering::Less)
    }

    /// Compare the value at `index` against a value held outside the sequence.
    pub async fn compare_to(&self, index: usize, key: f64) -> Result<Ordering> {
        let ordering = self.value(index)?.total_cmp(&key);
        self.shared.record_comparison();
        self.draw(&[index], &[]);
        self.suspend().await?;
        Ok(ordering)
    }

    /// Compare two buffered values, highlighting the destination slot.
    pub async fn compare_values(&self, a: f64, b: f64, highlight: usize) -> Result<Ordering> {
        self.shared.record_comparison();
        self.draw(&[highlight], &[]);
        self.suspend().await?;
        Ok(a.total_cmp(&b))
    }

    /// Read a value for digit extraction. Counted as a comparison.
    pub async fn inspect(&self, index: usize) -> Result<f64> {
        let value = self.value(index)?;
        self.shared.record_comparison();
        self.draw(&[index], &[]);
        self.suspend().await?;
        Ok(value)
    }

    // =========================================================================
    // Writes
    // =========================================================================

    pub async fn swap(&self, i: usize, j: usize) -> Result<()> {
        let mean = self.mutate(|elements| {
            checked(elements, i)?;
            checked(elements, j)?;
            elements.swap(i, j);
            Ok((elements[i].value + elements[j].value) / 2.0)
        })?;
        self.shared.record_swap();
        self.audio.play_tone(pentatonic_frequency(mean), SWAP_TONE);
        self.draw(&[], &[i, j]);
        self.suspend().await
    }

    /// Write `element` into slot `index`.
    pub async fn write(&self, index: usize, element: Element) -> Result<()> {
        self.exchange(index, element).await.map(|_| ())
    }

    /// Copy the element at `from` over slot `to`.
    pub async fn shift(&self, from: usize, to: usize) -> Result<()> {
        let element = self.element(from)?;
        self.write(to, element).await
    }

    /// Write `element` into slot `index`, returning what was there.
    pub async fn exchange(&self, index: usize, element: Element) -> Result<Element> {
        let previous = self.mutate(|elements| {
            checked(elements, index)?;
            Ok(std::mem::replace(&mut elements[index], element))
        })?;
        self.shared.record_swap();
        self.audio
            .play_tone(pentatonic_frequency(element.value), WRITE_TONE);
        self.draw(&[], &[index]);
        self.suspend().await?;
        Ok(previous)
    }

    /// Highlight a slot and suspend without counting or mutating.
    pub async fn touch(&self, index: usize) -> Result<()> {
        self.read(|seq| checked(seq.elements(), index).map(|_| ()))?;
        self.draw(&[index], &[]);
        self.suspend().await
    }

    // =========================================================================
    // Sorted marks
    // =========================================================================

    pub fn mark_sorted(&self, index: usize) {
        if let Some(element) = self.shared.sequence.lock().elements_mut().get_mut(index) {
            element.state = ElementState::Sorted;
        }
    }

    pub fn mark_range_sorted(&self, range: Range<usize>) {
        let mut seq = self.shared.sequence.lock();
        let elements = seq.elements_mut();
        let end = range.end.min(elements.len());
        for element in &mut elements[range.start.min(end)..end] {
            element.state = ElementState::Sorted;
        }
    }

    pub fn mark_all_sorted(&self) {
        self.shared.sequence.lock().mark_all_sorted();
    }

    // =========================================================================
    // Suspension
    // =========================================================================

    /// Park here while the run is paused. Every loop that could otherwise
    /// run long between suspensions calls this at entry.
    pub async fn checkpoint(&self) {
        self.shared.park_if_paused().await;
    }

    /// The single yield point after every primitive operation.
    ///
    /// In priority order: block for an explicit step in step mode, park
    /// while paused, then pace by speed (sleep, yield once, or yield every
    /// [`BATCH_INTERVAL`] suspensions) and check for a pause once more.
    pub async fn suspend(&self) -> Result<()> {
        self.shared.record_suspension();

        #[cfg(test)]
        {
            let fault_at = *self.shared.fault_at.lock();
            let count = self.shared.suspension_stats().suspensions;
            if fault_at.is_some_and(|at| count >= at) {
                return Err(SortlabError::Runtime(format!(
                    "injected fault at suspension {}",
                    count
                )));
            }
        }

        if self.shared.step_mode() {
            self.shared.await_step().await;
            if self.shared.step_mode() {
                return Ok(());
            }
        }

        self.shared.park_if_paused().await;

        match self.shared.speed().pacing() {
            Pacing::Sleep(delay) => {
                self.shared.record_host_yield();
                tokio::time::sleep(delay).await;
            }
            Pacing::Yield => {
                self.shared.record_host_yield();
                tokio::task::yield_now().await;
            }
            Pacing::Batched => {
                if self.shared.next_batch_tick() % BATCH_INTERVAL == 0 {
                    self.shared.record_host_yield();
                    tokio::task::yield_now().await;
                }
            }
        }

        // A pause requested while pacing holds the next operation.
        self.shared.park_if_paused().await;
        Ok(())
    }

    // =========================================================================
    // Completion
    // =========================================================================

    pub(crate) fn finish_timing(&self) {
        self.shared.freeze_clock();
    }

    /// Mark every element sorted in index order with a rising sweep of
    /// tones, then play the completion chord.
    pub(crate) async fn completion_sweep(&self) {
        let len = self.len();
        let stride = (len / SWEEP_TICKS).max(1);
        for index in (0..len).step_by(stride) {
            self.checkpoint().await;
            self.mark_sorted(index);
            if let Ok(value) = self.value(index) {
                self.audio.play_tone(pentatonic_frequency(value), SWEEP_TONE);
            }
            self.draw(&[], &[]);
            tokio::time::sleep(SWEEP_TICK).await;
        }
        self.mark_all_sorted();
        self.draw(&[], &[]);
        self.audio.play_chord(&COMPLETION_CHORD, CHORD_DURATION);
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn read<T>(&self, f: impl FnOnce(&Sequence) -> Result<T>) -> Result<T> {
        let seq = self.shared.sequence.lock();
        f(&seq)
    }

    fn mutate<T>(&self, f: impl FnOnce(&mut [Element]) -> Result<T>) -> Result<T> {
        let mut seq = self.shared.sequence.lock();
        f(seq.elements_mut())
    }

    /// Copies the elements out first so the renderer runs without the
    /// sequence lock held.
    fn draw(&self, comparing: &[usize], swapping: &[usize]) {
        let elements = self.shared.sequence.lock().elements().to_vec();
        self.renderer.draw(&Frame {
            elements: &elements,
            comparing,
            swapping,
            palette: &self.palette,
        });
    }
}

fn checked(elements: &[Element], index: usize) -> Result<&Element> {
    elements.get(index).ok_or(SortlabError::IndexOutOfBounds {
        index,
        len: elements.len(),
    })
}
