// Facade Pattern - one front for three format-specific audio players
// Callers ask for "play this file"; the facade does load-then-start on the
// right subsystem player.

use std::io::Write;

use crate::error::Result;

// ============================================================================
// Subsystem
// ============================================================================

pub mod players {
    use std::io::Write;

    use crate::error::{Error, Result};

    macro_rules! format_player {
        ($name:ident, $format:literal) => {
            #[derive(Debug, Default)]
            pub struct $name {
                loaded: Option<String>,
            }

            impl $name {
                pub const FORMAT: &'static str = $format;

                pub fn new() -> Self {
                    Self::default()
                }

                pub fn load_file(&mut self, filename: &str, out: &mut dyn Write) -> Result<()> {
                    writeln!(out, "Loading {} file: {}", Self::FORMAT, filename)?;
                    self.loaded = Some(filename.to_string());
                    Ok(())
                }

                pub fn start(&mut self, out: &mut dyn Write) -> Result<()> {
                    if self.loaded.is_none() {
                        return Err(Error::NothingLoaded { format: Self::FORMAT });
                    }
                    writeln!(out, "Playing {} file", Self::FORMAT)?;
                    Ok(())
                }

                pub fn loaded(&self) -> Option<&str> {
                    self.loaded.as_deref()
                }
            }
        };
    }

    format_player!(Mp3Player, "MP3");
    format_player!(WavPlayer, "WAV");
    format_player!(FlacPlayer, "FLAC");
}

use players::{FlacPlayer, Mp3Player, WavPlayer};

// ============================================================================
// Facade
// ============================================================================

/// Plays audio files without exposing the individual players.
///
/// Everything the players print goes to `out`, so the same facade drives
/// stdout in the demo and an in-memory buffer in tests.
pub struct AudioPlayerFacade<W: Write> {
    mp3: Mp3Player,
    wav: WavPlayer,
    flac: FlacPlayer,
    out: W,
}

impl<W: Write> AudioPlayerFacade<W> {
    pub fn new(out: W) -> Self {
        Self {
            mp3: Mp3Player::new(),
            wav: WavPlayer::new(),
            flac: FlacPlayer::new(),
            out,
        }
    }

    pub fn play_mp3(&mut self, filename: &str) -> Result<()> {
        tracing::debug!(filename, "facade playing mp3");
        self.mp3.load_file(filename, &mut self.out)?;
        self.mp3.start(&mut self.out)
    }

    pub fn play_wav(&mut self, filename: &str) -> Result<()> {
        tracing::debug!(filename, "facade playing wav");
        self.wav.load_file(filename, &mut self.out)?;
        self.wav.start(&mut self.out)
    }

    pub fn play_flac(&mut self, filename: &str) -> Result<()> {
        tracing::debug!(filename, "facade playing flac");
        self.flac.load_file(filename, &mut self.out)?;
        self.flac.start(&mut self.out)
    }

    pub fn into_output(self) -> W {
        self.out
    }
}

pub fn demo(out: &mut impl Write) -> Result<()> {
    let mut player = AudioPlayerFacade::new(out);
    player.play_mp3("song.mp3")?;
    player.play_wav("sound.wav")?;
    player.play_flac("music.flac")?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
