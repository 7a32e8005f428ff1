use bytes::{BufMut, Bytes, BytesMut};

pub const CURRENT_MARKER: &str = "<<<<<<< HEAD\n";
pub const SEPARATOR_MARKER: &str = "=======\n";
pub const END_MARKER: &str = ">>>>>>>\n";

/// Render the conflict file for one path
///
/// An absent side renders as empty. A side that does not end in a newline
/// gets one, so every marker starts on its own line.
pub fn render_conflict(current: Option<&[u8]>, given: Option<&[u8]>) -> Bytes {
    let mut content = BytesMut::new();

    content.put_slice(CURRENT_MARKER.as_bytes());
    put_side(&mut content, current);
    content.put_slice(SEPARATOR_MARKER.as_bytes());
    put_side(&mut content, given);
    content.put_slice(END_MARKER.as_bytes());

    content.freeze()
}

fn put_side(content: &mut BytesMut, side: Option<&[u8]>) {
    let Some(side) = side else {
        return;
    };

    content.put_slice(side);
    if side.last().is_some_and(|last| *last != b'\n') {
        content.put_u8(b'\n');
    }
}
