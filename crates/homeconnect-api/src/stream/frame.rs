/// One server-sent event as read off the wire, before JSON decoding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    /// Last event id; the API puts the appliance id here.
    pub id: String,

    /// Event type name, e.g. `"STATUS"` or `"KEEP-ALIVE"`.
    pub event: String,

    /// Raw payload text, possibly empty.
    pub data: String,
}

impl From<eventsource_stream::Event> for Frame {
    fn from(event: eventsource_stream::Event) -> Self {
        Self {
            id: event.id,
            event: event.event,
            data: event.data,
        }
    }
}

// ── Data-line fill ───────────────────────────────────────────────────

/// Byte-stream adaptor that gives every field-bearing frame a `data` line.
///
/// The SSE decoder drops frames whose data buffer is empty, but the API sends
/// lifecycle and `KEEP-ALIVE` frames with only `event:` and `id:` lines. An
/// empty `data:` line is inserted before the blank line that ends such a
/// frame, so it is dispatched with empty data. All other bytes pass through
/// untouched. State carries across chunk boundaries.
#[derive(Debug, Default)]
pub(crate) struct DataLineFill {
    /// First bytes of the current line, enough to recognise `data`.
    head: Vec<u8>,
    line_len: usize,
    /// The previous byte was a `\r` line terminator.
    after_cr: bool,
    frame_has_fields: bool,
    frame_has_data: bool,
}

impl DataLineFill {
    const DATA: &'static [u8] = b"data";

    pub(crate) fn feed(&mut self, chunk: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(chunk.len());
        for &byte in chunk {
            if self.after_cr {
                self.after_cr = false;
                if byte == b'\n' {
                    out.push(byte);
                    continue;
                }
            }

            match byte {
                b'\r' | b'\n' => {
                    if self.line_len == 0 {
                        if self.frame_has_fields && !self.frame_has_data {
                            out.extend_from_slice(b"data:\n");
                        }
                        self.frame_has_fields = false;
                        self.frame_has_data = false;
                    } else {
                        self.end_line();
                    }
                    self.after_cr = byte == b'\r';
                }
                _ => {
                    if self.head.len() <= Self::DATA.len() {
                        self.head.push(byte);
                    }
                    self.line_len += 1;
                }
            }
            out.push(byte);
        }
        out
    }

    fn end_line(&mut self) {
        // Lines starting with ':' are comments.
        if self.head.first() != Some(&b':') {
            self.frame_has_fields = true;
            let is_data = self.head.starts_with(Self::DATA)
                && matches!(self.head.get(Self::DATA.len()), None | Some(b':'));
            self.frame_has_data |= is_data;
        }
        self.head.clear();
        self.line_len = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(chunks: &[&str]) -> String {
        let mut filler = DataLineFill::default();
        let out: Vec<u8> = chunks
            .iter()
            .flat_map(|c| filler.feed(c.as_bytes()))
            .collect();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn event_only_frames_gain_an_empty_data_line() {
        assert_eq!(
            fill(&["event: KEEP-ALIVE\n\nevent: CONNECTED\nid: A1\n\n"]),
            "event: KEEP-ALIVE\ndata:\n\nevent: CONNECTED\nid: A1\ndata:\n\n"
        );
    }

    #[test]
    fn frames_with_data_pass_through() {
        let body = "event: STATUS\ndata: {\"items\":[]}\nid: A1\n\nevent: NOTIFY\ndata\n\n";
        assert_eq!(fill(&[body]), body);
    }

    #[test]
    fn comments_and_stray_blank_lines_are_left_alone() {
        let body = ": ping\n\n\n";
        assert_eq!(fill(&[body]), body);
    }

    #[test]
    fn fields_named_like_data_do_not_count() {
        assert_eq!(
            fill(&["dataset: x\n\n"]),
            "dataset: x\ndata:\n\n"
        );
    }

    #[test]
    fn crlf_and_split_chunks() {
        assert_eq!(
            fill(&["event: DISCON", "NECTED\r", "\nid: A1\r\n\r", "\n"]),
            "event: DISCONNECTED\r\nid: A1\r\ndata:\n\r\n"
        );
        assert_eq!(fill(&["event: PAIRED\r\r"]), "event: PAIRED\rdata:\n\r");
    }
}
