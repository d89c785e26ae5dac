pub mod dialog;
pub mod error;
pub mod process;

pub use dialog::CtrlDialog;
pub use error::{CtrlError, Result};

#[cfg(test)]
mod tests {
    use super::*;
    use port::{ByteChannel, MemChannel};

    fn dialog_with(script: impl FnOnce(&mut MemChannel)) -> CtrlDialog {
        let mut chan = MemChannel::new("/tmp/CTRL_A");
        script(&mut chan);
        CtrlDialog::new(Box::new(chan))
    }

    #[test]
    fn test_enq_ack() {
        let mut dialog = dialog_with(|chan| {
            chan.push(10, &[0x06]);
        });
        dialog.enq().unwrap();
        assert_eq!(dialog.into_channel().path(), "/tmp/CTRL_A");
    }

    #[test]
    fn test_enq_timeout() {
        let mut dialog = dialog_with(|_| {});
        assert!(matches!(dialog.enq(), Err(CtrlError::Timeout)));
    }

    #[test]
    fn test_enq_garbage_reply() {
        let mut dialog = dialog_with(|chan| {
            chan.push(10, &[0x15]);
        });
        assert!(matches!(dialog.enq(), Err(CtrlError::BadReply { .. })));
    }

    #[test]
    fn test_sampling_hz_query() {
        let mut dialog = dialog_with(|chan| {
            chan.push(10, b"1000000\r\n");
        });
        assert_eq!(dialog.sampling_hz().unwrap(), 1_000_000);
    }

    #[test]
    fn test_sampling_hz_bad_reply() {
        let mut dialog = dialog_with(|chan| {
            chan.push(10, b"notanumber\r\n");
        });
        assert!(matches!(
            dialog.sampling_hz(),
            Err(CtrlError::BadReply { .. })
        ));
    }

    #[test]
    fn test_error_counts() {
        let mut dialog = dialog_with(|chan| {
            chan.push(10, b"3 17\r\n");
        });
        assert_eq!(dialog.error_counts().unwrap(), (3, 17));
    }
}
