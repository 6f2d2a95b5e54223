//! core/playback/decoder.rs
//! Symphonia-backed decode of a beatmap audio track into a rodio Source.
//!
//! rodio's own mp3 decoder reports duration unreliably and its seek support
//! varies by format, so the engine opens tracks through here: probe with
//! Symphonia, compute duration from the codec parameters, and optionally
//! start decoding from a seek target.

use std::fs::File;
use std::path::Path;
use std::time::Duration;

use rodio::Source;
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{Decoder, DecoderOptions};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::{FormatOptions, FormatReader, SeekMode, SeekTo};
use symphonia::core::io::{MediaSourceStream, MediaSourceStreamOptions};
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use symphonia::core::units::{Time, TimeBase};

/// Open `path` as a streaming source starting at `start_ms`.
/// Returns the source plus the track duration in ms, when known.
pub fn open_mp3_at_ms(path: &Path, start_ms: u64) -> Result<(Mp3Source, Option<u64>), String> {
    let file = File::open(path).map_err(|e| format!("Open failed: {e}"))?;
    let mss = MediaSourceStream::new(Box::new(file), MediaSourceStreamOptions::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| format!("Format probe failed: {e}"))?;

    let mut format = probed.format;

    let track = format
        .default_track()
        .ok_or_else(|| "No supported audio track found.".to_string())?;
    let track_id = track.id;
    let codec_params = track.codec_params.clone();

    let duration_ms = duration_from_params(codec_params.time_base, codec_params.n_frames);

    let mut decoder = symphonia::default::get_codecs()
        .make(&codec_params, &DecoderOptions::default())
        .map_err(|e| format!("Decoder init failed: {e}"))?;

    if start_ms > 0 {
        let seek_to = SeekTo::Time {
            time: Time::from(Duration::from_millis(start_ms)),
            track_id: Some(track_id),
        };
        format
            .seek(SeekMode::Accurate, seek_to)
            .map_err(|e| format!("Seek failed: {e}"))?;

        // Decoder state is stale after a container seek; recreate it.
        decoder = symphonia::default::get_codecs()
            .make(&codec_params, &DecoderOptions::default())
            .map_err(|e| format!("Decoder re-init failed after seek: {e}"))?;
    }

    let source = Mp3Source::new(format, decoder, track_id);
    Ok((source, duration_ms))
}

fn duration_from_params(time_base: Option<TimeBase>, n_frames: Option<u64>) -> Option<u64> {
    let t = time_base?.calc_time(n_frames?);
    let ms = (t.seconds as f64 * 1000.0) + (t.frac * 1000.0);
    Some(ms.round() as u64)
}

/// A streaming rodio Source backed by Symphonia.
///
/// Decodes one packet at a time into an interleaved f32 buffer and yields
/// samples from it; refills on demand.
pub struct Mp3Source {
    format: Box<dyn FormatReader>,
    decoder: Box<dyn Decoder>,
    track_id: u32,

    sample_rate: u32,
    channels: u16,

    out: Vec<f32>,
    out_pos: usize,
    ended: bool,
}

impl Mp3Source {
    fn new(format: Box<dyn FormatReader>, decoder: Box<dyn Decoder>, track_id: u32) -> Self {
        let mut this = Self {
            format,
            decoder,
            track_id,
            sample_rate: 44100,
            channels: 2,
            out: Vec::new(),
            out_pos: 0,
            ended: false,
        };

        // Prime once so sample_rate/channels are correct before rodio asks.
        let _ = this.fill();

        this
    }

    fn fill(&mut self) -> Result<(), String> {
        if self.ended {
            return Ok(());
        }

        self.out.clear();
        self.out_pos = 0;

        loop {
            let packet = match self.format.next_packet() {
                Ok(p) => p,
                Err(SymphoniaError::IoError(_)) => {
                    self.ended = true;
                    return Ok(());
                }
                Err(SymphoniaError::ResetRequired) => {
                    self.decoder.reset();
                    continue;
                }
                Err(e) => return Err(format!("Decode read error: {e}")),
            };

            if packet.track_id() != self.track_id {
                continue;
            }

            let decoded = match self.decoder.decode(&packet) {
                Ok(d) => d,
                Err(SymphoniaError::IoError(_)) => {
                    self.ended = true;
                    return Ok(());
                }
                Err(SymphoniaError::DecodeError(_)) => {
                    // Corrupt packet; skip.
                    continue;
                }
                Err(SymphoniaError::ResetRequired) => {
                    self.decoder.reset();
                    continue;
                }
                Err(e) => return Err(format!("Decode error: {e}")),
            };

            let spec = *decoded.spec();
            self.sample_rate = spec.rate;
            self.channels = spec.channels.count() as u16;

            let mut buf = SampleBuffer::<f32>::new(decoded.capacity() as u64, spec);
            buf.copy_interleaved_ref(decoded);

            self.out.extend_from_slice(buf.samples());
            return Ok(());
        }
    }
}

impl Iterator for Mp3Source {
    type Item = f32;

    fn next(&mut self) -> Option<Self::Item> {
        if self.out_pos >= self.out.len() {
            if self.ended {
                return None;
            }
            if self.fill().is_err() {
                self.ended = true;
                return None;
            }
            if self.out.is_empty() && self.ended {
                return None;
            }
        }

        let s = self.out.get(self.out_pos).copied();
        self.out_pos += 1;
        s
    }
}

impl Source for Mp3Source {
    fn current_span_len(&self) -> Option<usize> {
        None
    }

    fn channels(&self) -> u16 {
        self.channels
    }

    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn total_duration(&self) -> Option<Duration> {
        None
    }
}
