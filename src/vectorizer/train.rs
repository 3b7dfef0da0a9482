use std::{
    fmt,
    sync::mpsc::{self, Receiver, RecvTimeoutError, SyncSender},
    thread,
};

use crate::{
    error::VsmError,
    vectorizer::{context::Context, document::Document, Vsm},
};

/// Outcome of one consumed training document, or the final cancellation error.
pub type TrainResult = Result<(), VsmError>;

/// Why a training worker stopped.
#[derive(Debug)]
enum Stop {
    InputClosed,
    Cancelled(VsmError),
    ReceiverDropped,
}

impl fmt::Display for Stop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stop::InputClosed => f.write_str("input closed"),
            Stop::Cancelled(err) => write!(f, "{err}"),
            Stop::ReceiverDropped => f.write_str("result receiver dropped"),
        }
    }
}

impl Vsm {
    /// Starts a background worker that trains every document received on `input`.
    ///
    /// Returns immediately. The worker sends one result per document, in the
    /// order the documents arrive; a document whose text cannot be normalized
    /// gets an `Err` and training continues with the next one.
    ///
    /// When `ctx` is cancelled or its deadline passes, the worker sends one
    /// last `Err` with the reason and stops reading; this happens even if
    /// `input` never yields anything. Documents trained before that stay in
    /// the index. The result channel closes once the worker exits, on every path.
    ///
    /// The result channel has no buffer: the worker waits until each result is
    /// received, so drain it. Dropping the receiver stops the worker at its
    /// next result.
    pub fn train(&self, ctx: Context, input: Receiver<Document>) -> Receiver<TrainResult> {
        let (output, results) = mpsc::sync_channel(0);
        let worker = TrainWorker {
            vsm: self.clone(),
            ctx,
            input,
            output,
        };
        thread::spawn(move || worker.run());
        results
    }
}

struct TrainWorker {
    vsm: Vsm,
    ctx: Context,
    input: Receiver<Document>,
    output: SyncSender<TrainResult>,
}

impl TrainWorker {
    fn run(self) {
        let mut trained = 0usize;
        let mut failed = 0usize;
        let stop = self.consume(&mut trained, &mut failed);
        tracing::info!(%stop, trained, failed, "training worker stopped");
        // self.output drops here, closing the result channel
    }

    fn consume(&self, trained: &mut usize, failed: &mut usize) -> Stop {
        let poll = self.vsm.config().cancel_poll();
        loop {
            // キャンセルを先に確認
            if let Some(err) = self.ctx.err() {
                // the caller may already be gone; stopping is all that is left either way
                let _ = self.output.send(Err(err.clone()));
                return Stop::Cancelled(err);
            }
            let wait = self.ctx.remaining().map_or(poll, |left| left.min(poll));
            let doc = match self.input.recv_timeout(wait) {
                Ok(doc) => doc,
                Err(RecvTimeoutError::Timeout) => continue,
                Err(RecvTimeoutError::Disconnected) => return Stop::InputClosed,
            };

            let class = doc.class.clone();
            let result = self.vsm.train_document(doc);
            match &result {
                Ok(()) => *trained += 1,
                Err(err) => {
                    *failed += 1;
                    tracing::warn!(%class, error = %err, "skipping training document");
                }
            }
            if self.output.send(result).is_err() {
                return Stop::ReceiverDropped;
            }
        }
    }
}
