//! Ambient background audio for the site header.
//!
//! The header owns at most one audio handle per mounted instance. The handle
//! is created lazily on the first activation, paused and rewound on
//! deactivation, and fully released on unmount.

use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

/// Фоновый эмбиент, проигрывается в цикле на пониженной громкости.
pub const AMBIENT_AUDIO_URL: &str =
    "https://ygpenhsaqtaoxmjaruad.supabase.co/storage/v1/object/public/audio//background_ambient.mp3";
pub const AMBIENT_VOLUME: f64 = 0.3;

/// Playback surface the ambient player drives.
///
/// The browser implementation wraps `HtmlAudioElement`; tests substitute a
/// recording mock to check the lifecycle without a DOM.
pub trait AudioSink {
    /// One-time setup right after the sink is created.
    fn configure(&self, looped: bool, volume: f64);
    /// Start playback. Must not panic when the browser rejects autoplay;
    /// rejections are logged and otherwise ignored.
    fn play(&self);
    fn pause(&self);
    /// Reset playback position to the beginning.
    fn rewind(&self);
    /// Drop the media source so the browser can free the stream.
    fn detach(&self);
}

/// Lifecycle wrapper around an optional audio sink.
pub struct AmbientPlayer<S> {
    sink: Option<S>,
}

impl<S: AudioSink> AmbientPlayer<S> {
    pub fn new() -> Self {
        Self { sink: None }
    }

    /// Activate ambient playback, creating the sink on first use.
    ///
    /// `create` may fail (returns `None`); activation is then a no-op and a
    /// later activation will retry. An already-created sink is reused.
    pub fn activate(&mut self, create: impl FnOnce() -> Option<S>) {
        if self.sink.is_none() {
            let Some(sink) = create() else {
                return;
            };
            sink.configure(true, AMBIENT_VOLUME);
            self.sink = Some(sink);
        }
        if let Some(sink) = &self.sink {
            sink.play();
        }
    }

    /// Pause and rewind to the start. The sink is kept for reactivation.
    pub fn deactivate(&mut self) {
        if let Some(sink) = &self.sink {
            sink.pause();
            sink.rewind();
        }
    }

    /// Unconditional teardown for unmount. Safe when no sink exists.
    pub fn release(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.pause();
            sink.detach();
        }
    }

    pub fn has_sink(&self) -> bool {
        self.sink.is_some()
    }
}

impl<S: AudioSink> Default for AmbientPlayer<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Browser-backed sink over an `<audio>` element.
pub struct WebAudioSink {
    element: HtmlAudioElement,
}

impl WebAudioSink {
    pub fn create(url: &str) -> Option<Self> {
        match HtmlAudioElement::new_with_src(url) {
            Ok(element) => Some(Self { element }),
            Err(err) => {
                log::warn!("Не удалось создать аудио-элемент: {:?}", err);
                None
            }
        }
    }
}

impl AudioSink for WebAudioSink {
    fn configure(&self, looped: bool, volume: f64) {
        self.element.set_loop(looped);
        self.element.set_volume(volume);
    }

    fn play(&self) {
        match self.element.play() {
            Ok(promise) => {
                wasm_bindgen_futures::spawn_local(async move {
                    if let Err(err) = JsFuture::from(promise).await {
                        log::warn!(
                            "Не удалось воспроизвести аудио (возможно, заблокировано браузером): {:?}",
                            err
                        );
                    }
                });
            }
            Err(err) => {
                log::warn!("Запуск воспроизведения отклонён: {:?}", err);
            }
        }
    }

    fn pause(&self) {
        let _ = self.element.pause();
    }

    fn rewind(&self) {
        self.element.set_current_time(0.0);
    }

    fn detach(&self) {
        self.element.set_src("");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        Configure,
        Play,
        Pause,
        Rewind,
        Detach,
    }

    #[derive(Clone, Default)]
    struct MockSink {
        calls: Rc<RefCell<Vec<Call>>>,
    }

    impl AudioSink for MockSink {
        fn configure(&self, looped: bool, volume: f64) {
            assert!(looped);
            assert_eq!(volume, AMBIENT_VOLUME);
            self.calls.borrow_mut().push(Call::Configure);
        }
        fn play(&self) {
            self.calls.borrow_mut().push(Call::Play);
        }
        fn pause(&self) {
            self.calls.borrow_mut().push(Call::Pause);
        }
        fn rewind(&self) {
            self.calls.borrow_mut().push(Call::Rewind);
        }
        fn detach(&self) {
            self.calls.borrow_mut().push(Call::Detach);
        }
    }

    #[test]
    fn sink_is_created_once_and_reused() {
        let sink = MockSink::default();
        let mut player = AmbientPlayer::new();
        let created = Rc::new(RefCell::new(0));

        for _ in 0..3 {
            let sink = sink.clone();
            let created = created.clone();
            player.activate(move || {
                *created.borrow_mut() += 1;
                Some(sink)
            });
        }

        assert_eq!(*created.borrow(), 1);
        assert_eq!(
            *sink.calls.borrow(),
            vec![Call::Configure, Call::Play, Call::Play, Call::Play]
        );
    }

    #[test]
    fn deactivate_pauses_and_rewinds_even_without_playback() {
        // Мок не "играет" на самом деле: деактивация всё равно должна
        // поставить на паузу и перемотать в начало.
        let sink = MockSink::default();
        let mut player = AmbientPlayer::new();
        let handle = sink.clone();
        player.activate(move || Some(handle));
        player.deactivate();

        assert_eq!(
            *sink.calls.borrow(),
            vec![Call::Configure, Call::Play, Call::Pause, Call::Rewind]
        );
        assert!(player.has_sink());
    }

    #[test]
    fn release_detaches_and_drops_the_sink() {
        let sink = MockSink::default();
        let mut player = AmbientPlayer::new();
        let handle = sink.clone();
        player.activate(move || Some(handle));
        player.release();

        assert!(!player.has_sink());
        assert_eq!(
            *sink.calls.borrow(),
            vec![Call::Configure, Call::Play, Call::Pause, Call::Detach]
        );
    }

    #[test]
    fn release_without_sink_is_safe() {
        let mut player = AmbientPlayer::<MockSink>::new();
        player.release();
        player.deactivate();
        assert!(!player.has_sink());
    }

    #[test]
    fn failed_creation_is_retried_on_next_activation() {
        let sink = MockSink::default();
        let mut player = AmbientPlayer::new();

        player.activate(|| None);
        assert!(!player.has_sink());

        let handle = sink.clone();
        player.activate(move || Some(handle));
        assert!(player.has_sink());
        assert_eq!(*sink.calls.borrow(), vec![Call::Configure, Call::Play]);
    }
}
