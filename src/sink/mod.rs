//! M3U playlist sink
//!
//! Implements the fixed external playlist contract the harvester core
//! feeds: a single `#EXTM3U` header, then per entry one `#EXTINF`
//! directive line, the player option lines, and the stream URL. A
//! single writer consumes the assembler stream so append order is
//! preserved and lines never interleave.

use crate::models::PlaylistEntry;
use futures::pin_mut;
use futures::Stream;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio_stream::StreamExt;

/// Write the whole playlist, returning the number of entries written.
pub async fn write_playlist<W, S>(
    writer: &mut W,
    entries: S,
    user_agent: &str,
    referer: &str,
) -> std::io::Result<usize>
where
    W: AsyncWrite + Unpin,
    S: Stream<Item = PlaylistEntry>,
{
    writer.write_all(b"#EXTM3U\n").await?;

    pin_mut!(entries);
    let mut written = 0usize;
    while let Some(entry) = entries.next().await {
        writer
            .write_all(format_entry(&entry, user_agent, referer).as_bytes())
            .await?;
        written += 1;
    }

    writer.flush().await?;
    Ok(written)
}

/// One playlist entry as its four-line M3U block.
fn format_entry(entry: &PlaylistEntry, user_agent: &str, referer: &str) -> String {
    format!(
        "#EXTINF:-1 tvg-name=\"{}\" tvg-logo=\"{}\" group-title=\"{}\",{}\n\
         #EXTVLCOPT:http-user-agent={}\n\
         #EXTVLCOPT:http-referrer={}\n\
         {}\n",
        entry.title,
        entry.logo_url.as_deref().unwrap_or(""),
        entry.group_label,
        entry.title,
        user_agent,
        referer,
        entry.stream_url,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::stream;

    fn entry(title: &str, group: &str, url: &str) -> PlaylistEntry {
        PlaylistEntry {
            title: title.to_string(),
            logo_url: Some("http://s/logo.png".to_string()),
            group_label: group.to_string(),
            stream_url: url.to_string(),
        }
    }

    #[tokio::test]
    async fn test_playlist_lines_follow_the_contract() {
        let mut out: Vec<u8> = Vec::new();
        let written = write_playlist(
            &mut out,
            stream::iter(vec![entry("Kanal", "Canlı Yayınlar", "http://s/k.m3u8")]),
            "ua",
            "http://ref/",
        )
        .await
        .unwrap();

        assert_eq!(written, 1);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "#EXTM3U\n\
             #EXTINF:-1 tvg-name=\"Kanal\" tvg-logo=\"http://s/logo.png\" \
             group-title=\"Canlı Yayınlar\",Kanal\n\
             #EXTVLCOPT:http-user-agent=ua\n\
             #EXTVLCOPT:http-referrer=http://ref/\n\
             http://s/k.m3u8\n"
        );
    }

    #[tokio::test]
    async fn test_missing_logo_serializes_as_empty_attribute() {
        let mut e = entry("X", "G", "http://s/x.m3u8");
        e.logo_url = None;
        let block = format_entry(&e, "ua", "ref");
        assert!(block.starts_with("#EXTINF:-1 tvg-name=\"X\" tvg-logo=\"\" group-title=\"G\",X\n"));
    }

    #[tokio::test]
    async fn test_entries_are_written_in_stream_order() {
        let mut out: Vec<u8> = Vec::new();
        let written = write_playlist(
            &mut out,
            stream::iter(vec![
                entry("A", "G", "http://s/a.m3u8"),
                entry("B", "G", "http://s/b.m3u8"),
            ]),
            "ua",
            "ref",
        )
        .await
        .unwrap();

        assert_eq!(written, 2);
        let text = String::from_utf8(out).unwrap();
        let a = text.find("http://s/a.m3u8").unwrap();
        let b = text.find("http://s/b.m3u8").unwrap();
        assert!(a < b);
    }
}
