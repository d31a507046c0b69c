//! Oscilloscope widget

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

/// Samples to skip so the trace starts on a rising zero crossing.
fn trigger_offset(samples: &[f32], window: usize) -> usize {
    let search = samples.len().saturating_sub(window);
    samples[..search.min(samples.len())]
        .windows(2)
        .position(|w| w[0] < 0.0 && w[1] >= 0.0)
        .unwrap_or(0)
}

pub fn render_waveform(frame: &mut Frame, area: Rect, samples: &[f32]) {
    let block = Block::default().title(" Output ").borders(Borders::ALL);

    let window = samples.len() / 2;
    let start = trigger_offset(samples, window);
    let data: Vec<(f64, f64)> = samples[start..]
        .iter()
        .take(window)
        .enumerate()
        .map(|(i, &sample)| (i as f64 / window.max(1) as f64, sample as f64))
        .collect();

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(&data);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .bounds([0.0, 1.0])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([-1.0, 1.0])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_finds_rising_crossing() {
        let samples = [0.5, -0.5, -0.2, 0.1, 0.4, -0.3, 0.2, 0.0];
        assert_eq!(trigger_offset(&samples, 2), 2);
        assert_eq!(trigger_offset(&[0.1; 8], 4), 0);
    }
}
