//! Terminal front panel: scope, spectrum and the key bindings that drive
//! the rig.

mod controls;
mod spectrum;
mod waveform;

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    DefaultTerminal, Frame,
};
use rtrb::Consumer;
use std::time::Duration;

use qsynth::control::{EnvelopeHandle, ParamSender, SendError};
use qsynth::fixedmath::q15_to_f32;
use qsynth::SAMPLE_RATE;

use crate::app::VoiceParams;
use spectrum::{render_spectrum, SpectrumAnalyzer};
use waveform::render_waveform;

pub use controls::Controls;

/// Scope history, also the FFT length.
const VIS_BUFFER_SIZE: usize = 2048;

const HELP: &str = " [Space] Gate  [Up/Down] Note  [Left/Right] Cutoff  [ [ ] ] Resonance  \
                    [W] Shape  [c/C] Chorus  [d/D] Delay  [Q] Quit";

pub struct UiApp {
    audio_rx: Consumer<f32>,
    params_tx: ParamSender<VoiceParams>,
    gate: EnvelopeHandle,
    controls: Controls,
    gate_open: bool,
    audio_buffer: Vec<f32>,
    spectrum: SpectrumAnalyzer,
    should_quit: bool,
}

impl UiApp {
    pub fn new(
        audio_rx: Consumer<f32>,
        params_tx: ParamSender<VoiceParams>,
        gate: EnvelopeHandle,
        controls: Controls,
    ) -> Self {
        Self {
            audio_rx,
            params_tx,
            gate,
            controls,
            gate_open: false,
            audio_buffer: vec![0.0; VIS_BUFFER_SIZE],
            spectrum: SpectrumAnalyzer::new(VIS_BUFFER_SIZE, SAMPLE_RATE as f64),
            should_quit: false,
        }
    }

    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            self.poll_audio();
            terminal.draw(|frame| self.render(frame))?;

            // ~60 fps
            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }
        Ok(())
    }

    fn poll_audio(&mut self) {
        if self.audio_rx.is_empty() {
            return;
        }
        while let Ok(sample) = self.audio_rx.pop() {
            self.audio_buffer.push(sample);
        }
        if self.audio_buffer.len() > VIS_BUFFER_SIZE {
            let excess = self.audio_buffer.len() - VIS_BUFFER_SIZE;
            self.audio_buffer.drain(..excess);
        }
        self.spectrum.update(&self.audio_buffer);
    }

    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char(' ') => {
                self.toggle_gate();
                return;
            }
            KeyCode::Up => self.controls.transpose(1),
            KeyCode::Down => self.controls.transpose(-1),
            KeyCode::Right => self.controls.move_cutoff(1),
            KeyCode::Left => self.controls.move_cutoff(-1),
            KeyCode::Char(']') => self.controls.move_resonance(true),
            KeyCode::Char('[') => self.controls.move_resonance(false),
            KeyCode::Char('w') | KeyCode::Char('W') => self.controls.next_shape(),
            KeyCode::Char('C') => self.controls.move_chorus_mix(true),
            KeyCode::Char('c') => self.controls.move_chorus_mix(false),
            KeyCode::Char('D') => self.controls.move_delay_mix(true),
            KeyCode::Char('d') => self.controls.move_delay_mix(false),
            _ => return,
        }
        let sent = self.params_tx.send(self.controls.params());
        self.check_sent(sent);
    }

    fn toggle_gate(&mut self) {
        let sent = if self.gate_open {
            self.gate.gate_off()
        } else {
            self.gate.gate_on()
        };
        if sent.is_ok() {
            self.gate_open = !self.gate_open;
        }
        self.check_sent(sent);
    }

    /// A full queue has already been logged; a vanished audio side ends the
    /// session.
    fn check_sent(&mut self, sent: Result<(), SendError>) {
        if let Err(SendError::Disconnected) = sent {
            log::error!("audio callback is gone, quitting");
            self.should_quit = true;
        }
    }

    fn status_line(&self) -> String {
        let c = &self.controls;
        format!(
            " gate {:<3}  note {:>5.1}  cutoff {:>5.1}  res {:>3.0}%  shape {:<10}  chorus {:>3.0}%  delay {:>3.0}%",
            if self.gate_open { "on" } else { "off" },
            c.note as f64 / 200.0,
            c.cutoff as f64 / 200.0,
            c.resonance as f64 / 655.35,
            c.shape_name(),
            q15_to_f32(c.chorus_mix) * 100.0,
            q15_to_f32(c.delay_mix) * 100.0,
        )
    }

    fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // Status
                Constraint::Min(8),     // Scope
                Constraint::Length(12), // Spectrum
                Constraint::Length(1),  // Help
            ])
            .split(frame.area());

        let status = Paragraph::new(self.status_line())
            .block(Block::default().title(" qsynth ").borders(Borders::ALL));
        frame.render_widget(status, chunks[0]);

        render_waveform(frame, chunks[1], &self.audio_buffer);
        render_spectrum(frame, chunks[2], self.spectrum.data());

        let help = Paragraph::new(HELP).style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, chunks[3]);
    }
}
