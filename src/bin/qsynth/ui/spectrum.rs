//! Spectrum widget
//!
//! Hann-windowed FFT of the scope buffer, folded into log-spaced bands.
//! Each band shows the peak power of the FFT bins it covers, with a slow
//! release so the trace does not flicker at frame rate.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};
use rustfft::{num_complex::Complex, Fft, FftPlanner};
use std::ops::Range;
use std::sync::Arc;

const BANDS: usize = 64;
const LOWEST_HZ: f64 = 30.0;
const FLOOR_DB: f64 = -100.0;
/// dB lost per frame once the band level drops.
const RELEASE_DB: f64 = 3.0;

pub struct SpectrumAnalyzer {
    fft: Arc<dyn Fft<f32>>,
    window: Vec<f32>,
    scratch: Vec<Complex<f32>>,
    /// FFT bins folded into each band.
    bands: Vec<Range<usize>>,
    /// `(log10(hz), dB)` per band.
    levels: Vec<(f64, f64)>,
}

impl SpectrumAnalyzer {
    pub fn new(len: usize, sample_rate: f64) -> Self {
        let fft = FftPlanner::new().plan_fft_forward(len);
        let window = (0..len)
            .map(|i| {
                let t = i as f32 / len.saturating_sub(1).max(1) as f32;
                0.5 - 0.5 * (2.0 * std::f32::consts::PI * t).cos()
            })
            .collect();

        let nyquist = sample_rate / 2.0;
        let bin_hz = sample_rate / len.max(1) as f64;
        let last_bin = (len / 2).max(1);
        let edge = |band: usize| LOWEST_HZ * (nyquist / LOWEST_HZ).powf(band as f64 / BANDS as f64);

        let mut bands = Vec::with_capacity(BANDS);
        let mut levels = Vec::with_capacity(BANDS);
        for band in 0..BANDS {
            let (lo, hi) = (edge(band), edge(band + 1));
            let start = ((lo / bin_hz) as usize).clamp(1, last_bin - 1);
            let end = ((hi / bin_hz).ceil() as usize).clamp(start + 1, last_bin);
            bands.push(start..end);
            levels.push(((lo * hi).sqrt().log10(), FLOOR_DB));
        }

        Self {
            fft,
            window,
            scratch: vec![Complex::new(0.0, 0.0); len],
            bands,
            levels,
        }
    }

    /// Analyse the newest `len` samples. Shorter input is ignored.
    pub fn update(&mut self, samples: &[f32]) {
        let len = self.window.len();
        if samples.len() < len {
            return;
        }
        let samples = &samples[samples.len() - len..];
        for ((bin, &x), &w) in self.scratch.iter_mut().zip(samples).zip(&self.window) {
            *bin = Complex::new(x * w, 0.0);
        }
        self.fft.process(&mut self.scratch);

        // Hann window coherent gain is 1/2
        let scale = (2.0 / len as f32).powi(2) * 4.0;
        for (range, (_, level)) in self.bands.iter().zip(self.levels.iter_mut()) {
            let power = self.scratch[range.clone()]
                .iter()
                .map(|bin| bin.norm_sqr() * scale)
                .fold(1e-12f32, f32::max);
            let db = 10.0 * (power as f64).log10();
            *level = db.max(*level - RELEASE_DB).max(FLOOR_DB);
        }
    }

    pub fn data(&self) -> &[(f64, f64)] {
        &self.levels
    }
}

pub fn render_spectrum(frame: &mut Frame, area: Rect, levels: &[(f64, f64)]) {
    let block = Block::default().title(" Spectrum ").borders(Borders::ALL);

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Green))
        .data(levels);

    let (lowest, highest) = match (levels.first(), levels.last()) {
        (Some(first), Some(last)) => (first.0, last.0),
        _ => (0.0, 1.0),
    };

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .bounds([lowest, highest])
                .labels(vec!["30", "300", "3k", "24k"])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([FLOOR_DB, 0.0])
                .labels(vec!["-100", "-50", "0"])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sine_peaks_in_its_band() {
        let len = 2048;
        let hz = 1000.0;
        let samples: Vec<f32> = (0..len)
            .map(|i| 0.5 * (2.0 * std::f32::consts::PI * hz * i as f32 / 48_000.0).sin())
            .collect();
        let mut analyzer = SpectrumAnalyzer::new(len, 48_000.0);
        analyzer.update(&samples);

        let (peak_band, &(center, db)) = analyzer
            .data()
            .iter()
            .enumerate()
            .max_by(|a, b| a.1 .1.total_cmp(&b.1 .1))
            .unwrap();
        assert!((10f64.powf(center) / hz as f64 - 1.0).abs() < 0.1, "band {} at {}", peak_band, center);
        // Amplitude 0.5 is about -6 dB
        assert!((-9.0..-3.0).contains(&db), "peak {} dB", db);
    }

    #[test]
    fn test_short_input_is_ignored() {
        let mut analyzer = SpectrumAnalyzer::new(1024, 48_000.0);
        analyzer.update(&[0.5; 100]);
        assert!(analyzer.data().iter().all(|&(_, db)| db == FLOOR_DB));
    }
}
