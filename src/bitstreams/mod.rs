/// Sequential bit-granularity input.
pub trait BitRead {
    /// Reads the next `len` bits (at most 64) as an unsigned integer, most significant
    /// bit first. Returns `None` once fewer than `len` bits are left in the stream.
    fn read_bits(&mut self, len: u64) -> Option<u64>;

    /// Rewinds the stream to its first bit.
    fn reset(&mut self);

    /// Number of bits consumed since the last reset.
    fn bits_read(&self) -> usize;
}

/// Sequential bit-granularity output.
pub trait BitWrite {
    /// Appends the low `len` bits (at most 64) of `value`, most significant bit first.
    fn write_bits(&mut self, len: u64, value: u64);

    /// Number of bits appended so far.
    fn bits_written(&self) -> usize;
}

#[derive(Clone, Debug)]
pub struct BinaryWriter {
    pub os: Box<[u8]>,
}

pub struct BinaryWriterBuilder {
    os: Vec<u8>,
    pub written_bits: usize,
    pub current: u64,
    pub free: usize,
}

impl Default for BinaryWriterBuilder {
    fn default() -> Self {
        BinaryWriterBuilder {
            os: Vec::default(),
            written_bits: 0,
            current: 0,
            free: 8,
        }
    }
}

impl BinaryWriterBuilder {
    /// Closes the stream, zero-padding the last partial byte if there is one.
    pub fn build(mut self) -> BinaryWriter {
        if self.free < 8 {
            self.write(self.current);
        }

        BinaryWriter {
            os: self.os.into_boxed_slice()
        }
    }

    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn write(&mut self, b: u64) {
        self.os.push(b as u8);
    }

    #[inline(always)]
    pub fn write_in_current(&mut self, b: u64, len: u64) -> u64 {
        self.free -= len as usize;
        self.current |= (b & ((1 << len) - 1)) << self.free;

        if self.free == 0 {
            self.write(self.current);
            self.free = 8;
            self.current = 0;
        }

        self.written_bits += len as usize;
        len
    }

    #[inline(always)]
    pub fn push_bits(&mut self, x: u64, len: u64) -> u64 {
        assert!(len <= 64, "Cannot write {} bits from an integer", len);

        let mut left = len;

        while left != 0 {
            let chunk = left.min(self.free as u64);
            left -= chunk;
            self.write_in_current(x >> left, chunk);
        }

        len
    }
}

impl BitWrite for BinaryWriterBuilder {
    #[inline(always)]
    fn write_bits(&mut self, len: u64, value: u64) {
        self.push_bits(value, len);
    }

    fn bits_written(&self) -> usize {
        self.written_bits
    }
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct BinaryReader {
    is: Box<[u8]>,
    pub position: usize,
    pub read_bits: usize,
    current: u64,
    fill: usize,
}

impl BinaryReader {
    pub fn new(input_stream: Box<[u8]>) -> Self {
        BinaryReader {
            is: input_stream,
            position: 0,
            read_bits: 0,
            current: 0,
            fill: 0
        }
    }

    /// Moves the reader to the absolute bit offset `pos`. Offsets past the end
    /// leave the reader at end of stream.
    pub fn set_position(&mut self, pos: u64) {
        let pos = pos.min((self.is.len() as u64) << 3);

        self.fill = 0;
        self.current = 0;
        self.position = pos as usize >> 3;
        self.read_bits = pos as usize;

        let residual = pos & 7;

        if residual != 0 {
            if let Some(byte) = self.read() {
                self.current = byte;
                self.fill = (8 - residual) as usize;
            }
        }
    }

    #[inline(always)]
    pub fn get_position(&self) -> usize {
        (self.position << 3) - self.fill
    }

    #[inline(always)]
    pub fn remaining_bits(&self) -> usize {
        (self.is.len().saturating_sub(self.position) << 3) + self.fill
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.is.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.is.is_empty()
    }

    #[inline(always)]
    fn read(&mut self) -> Option<u64> {
        let byte = *self.is.get(self.position)?;
        self.position += 1;
        Some(byte as u64)
    }

    #[inline(always)]
    fn read_from_current(&mut self, len: u64) -> u64 {
        debug_assert!(len as usize <= self.fill);

        self.read_bits += len as usize;

        self.fill -= len as usize;
        self.current >> self.fill & ((1 << len) - 1)
    }

    #[inline(always)]
    pub fn read_int(&mut self, len: u64) -> Option<u64> {
        assert!(len <= 64, "Cannot read {} bits into an integer", len);

        if len as usize > self.remaining_bits() {
            return None;
        }

        let mut x = 0;
        let mut left = len;

        while left != 0 {
            if self.fill == 0 {
                self.current = self.read()?;
                self.fill = 8;
            }

            let chunk = left.min(self.fill as u64);
            x = x << chunk | self.read_from_current(chunk);
            left -= chunk;
        }

        Some(x)
    }
}

impl BitRead for BinaryReader {
    #[inline(always)]
    fn read_bits(&mut self, len: u64) -> Option<u64> {
        self.read_int(len)
    }

    fn reset(&mut self) {
        self.set_position(0);
    }

    fn bits_read(&self) -> usize {
        self.read_bits
    }
}
