//! Planar audio block view.
//!
//! [`AudioBlock`] borrows host memory for the duration of one process call.
//! Channels are separate equal-length slices; the block never allocates and
//! never outlives the callback that created it.

/// Mutable planar view over one host-delivered block of audio.
///
/// `input_channels` records how many of the channels carry live input. On a
/// layout with more outputs than inputs, the surplus channels hold whatever
/// the host left there and must be cleared before anything reads them.
///
/// # Example
///
/// ```rust
/// use simplecomp_core::AudioBlock;
///
/// let mut left = [0.5f32; 4];
/// let mut right = [0.25f32; 4];
/// let mut channels: [&mut [f32]; 2] = [&mut left, &mut right];
///
/// let mut block = AudioBlock::new(&mut channels, 2);
/// block.apply_gain(2.0);
/// assert_eq!(block.channel(0), &[1.0; 4]);
/// assert_eq!(block.channel(1), &[0.5; 4]);
/// ```
pub struct AudioBlock<'a, 'b> {
    channels: &'a mut [&'b mut [f32]],
    num_samples: usize,
    input_channels: usize,
}

impl<'a, 'b> AudioBlock<'a, 'b> {
    /// Wrap planar channel slices.
    ///
    /// The block length is the shortest channel; hosts hand over equal-length
    /// channels, which is checked in debug builds. `input_channels` is capped
    /// at the channel count.
    pub fn new(channels: &'a mut [&'b mut [f32]], input_channels: usize) -> Self {
        let num_samples = channels.iter().map(|c| c.len()).min().unwrap_or(0);
        debug_assert!(
            channels.iter().all(|c| c.len() == num_samples),
            "Channels must have the same length"
        );
        let input_channels = input_channels.min(channels.len());
        Self {
            channels,
            num_samples,
            input_channels,
        }
    }

    /// Number of channels in the block.
    #[inline]
    pub fn num_channels(&self) -> usize {
        self.channels.len()
    }

    /// Number of sample frames per channel.
    #[inline]
    pub fn num_samples(&self) -> usize {
        self.num_samples
    }

    /// Number of channels carrying live input.
    #[inline]
    pub fn num_input_channels(&self) -> usize {
        self.input_channels
    }

    /// Returns true if the block has no channels or no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty() || self.num_samples == 0
    }

    /// Samples of one channel.
    ///
    /// # Panics
    /// Panics if the channel index is out of bounds.
    #[inline]
    pub fn channel(&self, channel: usize) -> &[f32] {
        &self.channels[channel][..self.num_samples]
    }

    /// Mutable samples of one channel.
    ///
    /// # Panics
    /// Panics if the channel index is out of bounds.
    #[inline]
    pub fn channel_mut(&mut self, channel: usize) -> &mut [f32] {
        &mut self.channels[channel][..self.num_samples]
    }

    /// Iterate over mutable channel slices.
    #[inline]
    pub fn channels_mut(&mut self) -> impl Iterator<Item = &mut [f32]> {
        let num_samples = self.num_samples;
        self.channels.iter_mut().map(move |c| &mut c[..num_samples])
    }

    /// Multiply every sample of every channel by `gain`.
    #[inline]
    pub fn apply_gain(&mut self, gain: f32) {
        for channel in self.channels_mut() {
            for sample in channel.iter_mut() {
                *sample *= gain;
            }
        }
    }

    /// Zero every channel at or beyond the live input count.
    pub fn clear_unused_channels(&mut self) {
        let first = self.input_channels;
        let num_samples = self.num_samples;
        for channel in self.channels.iter_mut().skip(first) {
            channel[..num_samples].fill(0.0);
        }
    }

    /// Largest absolute sample value across all channels.
    pub fn peak(&self) -> f32 {
        self.channels
            .iter()
            .flat_map(|c| c[..self.num_samples].iter())
            .fold(0.0f32, |acc, s| acc.max(s.abs()))
    }
}
