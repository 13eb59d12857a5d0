use super::*;

fn cfg(width: u32, height: u32) -> SinkConfig {
    SinkConfig {
        width,
        height,
        fps: Fps { num: 30, den: 1 },
        audio: None,
    }
}

#[test]
fn opts_default_to_overwrite_and_black_background() {
    let opts = FfmpegSinkOpts::new("out/video.mp4");
    assert!(opts.overwrite);
    assert_eq!(opts.bg_rgba, [0, 0, 0, 255]);
    assert_eq!(opts.out_path, PathBuf::from("out/video.mp4"));
}

#[test]
fn begin_rejects_bad_dimensions_before_spawning() {
    let tmp = std::env::temp_dir().join("deckcast-ffmpeg-unit.mp4");

    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new(&tmp));
    let err = sink.begin(cfg(0, 1080)).unwrap_err();
    assert!(err.to_string().contains("non-zero"));

    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new(&tmp));
    let err = sink.begin(cfg(1919, 1080)).unwrap_err();
    assert!(err.to_string().contains("even"));

    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new(&tmp));
    let err = sink
        .begin(SinkConfig {
            fps: Fps { num: 0, den: 1 },
            ..cfg(1920, 1080)
        })
        .unwrap_err();
    assert!(err.to_string().contains("fps"));
}

#[test]
fn begin_rejects_missing_audio_file() {
    let tmp = std::env::temp_dir().join("deckcast-ffmpeg-unit.mp4");
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new(&tmp));
    let err = sink
        .begin(SinkConfig {
            audio: Some(crate::encode::sink::AudioInput {
                path: PathBuf::from("/definitely/not/here.mp3"),
            }),
            ..cfg(1920, 1080)
        })
        .unwrap_err();
    assert!(matches!(err, DeckcastError::Assembly(_)));
}

#[test]
fn push_and_end_without_begin_error() {
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new("out.mp4"));
    let frame = FrameRGBA {
        width: 2,
        height: 2,
        data: vec![0; 16],
        premultiplied: true,
    };
    assert!(sink.push_frame(FrameIndex(0), &frame).is_err());
    assert!(sink.end().is_err());
}

#[test]
fn flatten_premul_alpha_0_returns_bg() {
    let src = vec![0u8, 0, 0, 0];
    let mut dst = vec![0u8; 4];
    flatten_premul_over_bg_to_opaque_rgba8(&mut dst, &src, [10, 20, 30, 255]).unwrap();
    assert_eq!(dst, vec![10, 20, 30, 255]);
}

#[test]
fn flatten_premul_alpha_255_is_identity() {
    let src = vec![1u8, 2, 3, 255];
    let mut dst = vec![0u8; 4];
    flatten_premul_over_bg_to_opaque_rgba8(&mut dst, &src, [10, 20, 30, 255]).unwrap();
    assert_eq!(dst, src);
}

#[test]
fn flatten_rejects_mismatched_buffers() {
    let src = vec![0u8; 8];
    let mut dst = vec![0u8; 4];
    assert!(flatten_premul_over_bg_to_opaque_rgba8(&mut dst, &src, [0, 0, 0, 255]).is_err());
}
