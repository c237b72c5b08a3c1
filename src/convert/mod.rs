use std::thread;

use crossbeam_channel::{unbounded, Receiver, Sender};

use crate::color::{cube, Rgb};
use crate::shared::constants;
use crate::utils::logger;

/// Process exit status, delivered through the message stream before any
/// output lines.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Status {
    Ok = 0,
    Fail = 1,
}

/// One unit of converter output. The consumer writes these in arrival
/// order; a single run produces at most three.
#[derive(Debug, PartialEq, Eq)]
pub enum Message {
    Status(Status),
    /// One result line for stdout.
    Result(String),
    /// One diagnostic line for stderr.
    Diagnostic(String),
}

/// Read-only conversion inputs, populated once from the command line and
/// never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct Request {
    pub colour: Option<String>,
    pub bgcolour: Option<String>,
    pub tag: String,
    pub term: bool,
}

/// Spawns the producer for one conversion and hands back the receiving end.
/// The channel closes when the producer is done.
pub fn run(request: Request) -> Receiver<Message> {
    let (sender, receiver) = unbounded();
    thread::spawn(move || produce(request, &sender));
    receiver
}

fn emit(out: &Sender<Message>, message: Message) {
    // A closed channel means the consumer is gone; there is nowhere left
    // to report to.
    let _ = out.send(message);
}

fn produce(request: Request, out: &Sender<Message>) {
    let colour = match request.colour.as_deref() {
        Some(text) if !text.is_empty() => text,
        _ => {
            emit(out, Message::Status(Status::Fail));
            emit(
                out,
                Message::Diagnostic("No colour provided (--colour flag)".to_string()),
            );
            return;
        }
    };

    let foreground = match colour.parse::<Rgb>() {
        Ok(foreground) => foreground,
        Err(err) => {
            logger::error(&format!("colour parsing failed: {}", err));
            emit(out, Message::Status(Status::Fail));
            emit(out, Message::Diagnostic("Colour parsing failed.".to_string()));
            emit(out, Message::Diagnostic(err.to_string()));
            return;
        }
    };
    let fg_index = cube::cube_index(foreground);
    logger::debug(&format!("foreground {} -> cube index {}", colour, fg_index));

    let bg_text = match request.bgcolour.as_deref() {
        None | Some("") => {
            emit(out, Message::Status(Status::Ok));
            if request.term {
                emit(out, Message::Result(cube::escape_sequence(fg_index)));
            } else {
                emit(out, Message::Result(fg_index.to_string()));
            }
            return;
        }
        Some(text) => text,
    };

    // The sentinel background keeps the :hi shape but leaves the
    // background fields out entirely.
    if bg_text == constants::TRANSPARENT_BG {
        emit(out, Message::Status(Status::Ok));
        emit(
            out,
            Message::Result(format!(
                "hi {} guifg={} ctermfg={}",
                request.tag, colour, fg_index
            )),
        );
        return;
    }

    let background = match bg_text.parse::<Rgb>() {
        Ok(background) => background,
        Err(err) => {
            logger::error(&format!("background colour parsing failed: {}", err));
            emit(out, Message::Status(Status::Fail));
            emit(
                out,
                Message::Diagnostic("Background colour parsing failed.".to_string()),
            );
            emit(out, Message::Diagnostic(err.to_string()));
            return;
        }
    };

    // guifg/guibg carry the user's text verbatim; only the cterm fields
    // are computed.
    emit(out, Message::Status(Status::Ok));
    emit(
        out,
        Message::Result(format!(
            "hi {} guifg={} guibg={} ctermfg={} ctermbg={}",
            request.tag,
            colour,
            bg_text,
            fg_index,
            cube::cube_index(background)
        )),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(request: Request) -> Vec<Message> {
        run(request).iter().collect()
    }

    fn request(colour: &str) -> Request {
        Request {
            colour: Some(colour.to_string()),
            tag: "Example".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn missing_colour_fails() {
        let messages = convert(Request::default());
        assert_eq!(messages[0], Message::Status(Status::Fail));
        assert!(
            matches!(&messages[1], Message::Diagnostic(line) if line.contains("No colour provided"))
        );
        assert_eq!(messages.len(), 2);
    }

    #[test]
    fn empty_colour_fails() {
        let messages = convert(Request {
            colour: Some(String::new()),
            ..Default::default()
        });
        assert_eq!(messages[0], Message::Status(Status::Fail));
        assert_eq!(messages.len(), 2);
    }

    #[test]
    fn plain_index_output() {
        let messages = convert(request("112233"));
        assert_eq!(
            messages,
            vec![
                Message::Status(Status::Ok),
                Message::Result("17".to_string()),
            ]
        );
    }

    #[test]
    fn term_escape_output() {
        let mut req = request("112233");
        req.term = true;
        let messages = convert(req);
        assert_eq!(
            messages,
            vec![
                Message::Status(Status::Ok),
                Message::Result("\x1b[38;5;17m\x1b[0m".to_string()),
            ]
        );
    }

    #[test]
    fn unparsable_colour_emits_two_diagnostics() {
        let messages = convert(request("GARBAGE"));
        assert_eq!(messages[0], Message::Status(Status::Fail));
        assert_eq!(
            messages[1],
            Message::Diagnostic("Colour parsing failed.".to_string())
        );
        assert!(
            matches!(&messages[2], Message::Diagnostic(line) if line.contains("invalid RGB hex code"))
        );
        assert_eq!(messages.len(), 3);
    }

    #[test]
    fn hi_statement_with_background() {
        let mut req = request("112233");
        req.bgcolour = Some("445566".to_string());
        req.tag = "Foo".to_string();
        let messages = convert(req);
        assert_eq!(
            messages,
            vec![
                Message::Status(Status::Ok),
                Message::Result("hi Foo guifg=112233 guibg=445566 ctermfg=17 ctermbg=60".to_string()),
            ]
        );
    }

    #[test]
    fn transparent_background_drops_bg_fields() {
        let mut req = request("112233");
        req.bgcolour = Some("transparent".to_string());
        req.tag = "Foo".to_string();
        // --term does not win over an explicit background
        req.term = true;
        let messages = convert(req);
        assert_eq!(
            messages,
            vec![
                Message::Status(Status::Ok),
                Message::Result("hi Foo guifg=112233 ctermfg=17".to_string()),
            ]
        );
    }

    #[test]
    fn empty_background_means_plain_index() {
        let mut req = request("112233");
        req.bgcolour = Some(String::new());
        let messages = convert(req);
        assert_eq!(
            messages,
            vec![
                Message::Status(Status::Ok),
                Message::Result("17".to_string()),
            ]
        );
    }

    #[test]
    fn unparsable_background_fails() {
        let mut req = request("112233");
        req.bgcolour = Some("zzz".to_string());
        let messages = convert(req);
        assert_eq!(messages[0], Message::Status(Status::Fail));
        assert_eq!(
            messages[1],
            Message::Diagnostic("Background colour parsing failed.".to_string())
        );
        assert!(
            matches!(&messages[2], Message::Diagnostic(line) if line.contains("invalid RGB hex code"))
        );
    }

    #[test]
    fn hi_fields_keep_raw_colour_text() {
        let mut req = request("#FF0000");
        req.bgcolour = Some("#FFFFFF".to_string());
        let messages = convert(req);
        assert_eq!(
            messages[1],
            Message::Result(
                "hi Example guifg=#FF0000 guibg=#FFFFFF ctermfg=196 ctermbg=231".to_string()
            )
        );
    }
}
