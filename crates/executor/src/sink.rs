use std::sync::mpsc::Sender;

use fm_domain::ProgressEvent;

/// 进度事件出口，由宿主提供（事件总线、窗口、通道等）
pub trait ProgressSink {
    fn emit(&self, topic: &str, event: &ProgressEvent);
}

impl<F> ProgressSink for F
where
    F: Fn(&str, &ProgressEvent),
{
    fn emit(&self, topic: &str, event: &ProgressEvent) {
        self(topic, event)
    }
}

/// 丢弃所有事件
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl ProgressSink for NoopSink {
    fn emit(&self, _topic: &str, _event: &ProgressEvent) {}
}

/// 把事件转发到通道，适合在工作线程里复制、在 UI 线程消费
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: Sender<(String, ProgressEvent)>,
}

impl ChannelSink {
    pub fn new(tx: Sender<(String, ProgressEvent)>) -> Self {
        Self { tx }
    }
}

impl ProgressSink for ChannelSink {
    fn emit(&self, topic: &str, event: &ProgressEvent) {
        // 接收端已关闭时没有人关心进度，静默丢弃
        let _ = self.tx.send((topic.to_string(), event.clone()));
    }
}
