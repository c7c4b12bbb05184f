//! Render adapters: the seam between scene assembly and drawing.

use std::io::Write;

use super::types::NetworkScene;

/// A drawing backend. Receives fully computed scenes.
pub trait RenderAdapter {
    type Error: std::fmt::Display;

    fn render(&mut self, scene: &NetworkScene) -> Result<(), Self::Error>;
}

/// Writes each scene as one JSON document, for front ends that draw in
/// another process.
#[derive(Debug)]
pub struct JsonSceneWriter<W: Write> {
    writer: W,
    pretty: bool,
}

impl<W: Write> JsonSceneWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pretty: false,
        }
    }

    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RenderAdapter for JsonSceneWriter<W> {
    type Error = serde_json::Error;

    fn render(&mut self, scene: &NetworkScene) -> Result<(), Self::Error> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, scene)?;
        } else {
            serde_json::to_writer(&mut self.writer, scene)?;
        }
        self.writer.write_all(b"\n").map_err(serde_json::Error::io)
    }
}
