//! Render → present scenarios checked against captured bus traffic.

use embedded_graphics::geometry::Point;
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, Operation};
use oled_text::commands::INIT_SEQUENCE;
use oled_text::transport::{RecordingTransport, Transaction};
use oled_text::{draw_text, Framebuffer, I2cTransport, OledDriver, DEFAULT_ADDRESS, WIDTH};

/// Page 0 after drawing "Hi" at (0, 0): 'H' in columns 0..5, a blank gap
/// column, 'i' in columns 6..11.
const HI_PAGE0_PREFIX: [u8; 11] = [
    0x7F, 0x08, 0x08, 0x08, 0x7F, // H
    0x00, // gap
    0x00, 0x44, 0x7D, 0x40, 0x00, // i
];

fn hi_page0() -> [u8; WIDTH] {
    let mut page = [0u8; WIDTH];
    page[..HI_PAGE0_PREFIX.len()].copy_from_slice(&HI_PAGE0_PREFIX);
    page
}

struct NoDelay;

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

/// I2C bus keeping the raw bytes of every transaction.
#[derive(Default)]
struct CapturingI2c {
    frames: Vec<(u8, Vec<u8>)>,
}

impl ErrorType for CapturingI2c {
    type Error = ErrorKind;
}

impl I2c for CapturingI2c {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        let mut bytes = Vec::new();
        for op in operations.iter() {
            match op {
                Operation::Write(data) => bytes.extend_from_slice(data),
                _ => return Err(ErrorKind::Other),
            }
        }
        self.frames.push((address, bytes));
        Ok(())
    }
}

#[test]
fn hi_golden_page_through_recorder() {
    let mut driver = OledDriver::new(RecordingTransport::<64>::new());
    driver.initialize(&mut NoDelay).unwrap();

    let mut fb = Framebuffer::new();
    draw_text(&mut fb, "Hi", Point::zero());
    driver.present(&fb).unwrap();

    let frame = &driver.transport().log()[INIT_SEQUENCE.len()..];
    assert_eq!(frame.len(), 32);

    assert_eq!(frame[0], Transaction::Command(0xB0));
    assert_eq!(frame[1], Transaction::Command(0x00));
    assert_eq!(frame[2], Transaction::Command(0x10));
    let Transaction::Data(page0) = &frame[3] else {
        panic!("expected page 0 data, got {:?}", frame[3]);
    };
    assert_eq!(page0.as_slice(), &hi_page0()[..]);

    for (page, chunk) in frame.chunks(4).enumerate().skip(1) {
        let Transaction::Data(bytes) = &chunk[3] else {
            panic!("expected page {page} data");
        };
        assert!(bytes.iter().all(|&b| b == 0), "page {page} should be blank");
    }
}

#[test]
fn hi_golden_page_on_the_wire() {
    let transport = I2cTransport::new(CapturingI2c::default(), DEFAULT_ADDRESS);
    let mut driver = OledDriver::new(transport);
    driver.initialize(&mut NoDelay).unwrap();

    let mut fb = Framebuffer::new();
    draw_text(&mut fb, "Hi", Point::zero());
    driver.present(&fb).unwrap();

    let frames = driver.release().release().frames;
    assert_eq!(frames.len(), INIT_SEQUENCE.len() + 32);
    assert!(frames.iter().all(|(address, _)| *address == 0x3C));

    // Every init byte is its own [0x00, cmd] write.
    for (frame, &command) in frames.iter().zip(INIT_SEQUENCE.iter()) {
        assert_eq!(frame.1, [0x00, command]);
    }

    let update = &frames[INIT_SEQUENCE.len()..];
    for (page, chunk) in update.chunks(4).enumerate() {
        assert_eq!(chunk[0].1, [0x00, 0xB0 + page as u8]);
        assert_eq!(chunk[1].1, [0x00, 0x00]);
        assert_eq!(chunk[2].1, [0x00, 0x10]);
        assert_eq!(chunk[3].1.len(), WIDTH + 1);
        assert_eq!(chunk[3].1[0], 0x40);
    }

    let mut expected = vec![0x40];
    expected.extend_from_slice(&hi_page0());
    assert_eq!(update[3].1, expected);
}

#[test]
fn banner_scene_renders_expected_line() {
    let mut driver = OledDriver::new(RecordingTransport::<64>::new());
    let mut fb = Framebuffer::new();
    oled_text::show_banner(&mut driver, &mut fb, &oled_text::Banner::default(), &mut NoDelay)
        .unwrap();

    // "Noe Mendoza R": 13 cells of 6 columns, space cells left blank.
    let page2 = fb.page(2).unwrap();
    let n = oled_text::lookup('N').unwrap();
    assert_eq!(&page2[0..5], n.columns());
    assert!(page2[18..24].iter().all(|&b| b == 0), "space after 'Noe'");
    let r = oled_text::lookup('R').unwrap();
    assert_eq!(&page2[72..77], r.columns());
    assert!(page2[77..].iter().all(|&b| b == 0));
}
