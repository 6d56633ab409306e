use std::fmt::{
	Display,
	Formatter,
	self
};

/// Size of a Z80 address space
pub const MEMORY_SIZE: usize = 65536;

/// Common device operations
pub trait Device {
	/// Reads data from an address on the device
	fn read(&self, address: usize, length: usize) -> Vec<u8>;

	/// Writes data to an address on the device
	fn write(&mut self, address: usize, data: &[u8]);

	/// Retrieves a single unsigned byte from the address on the device
	#[inline]
	fn get_u8(&self, address: usize) -> u8 {
		self.read(address, 1).first().copied().unwrap_or_default()
	}

	/// Retrieves a single signed byte from the address on the device
	#[inline]
	fn get_i8(&self, address: usize) -> i8 {
		i8::from_ne_bytes([self.get_u8(address)])
	}

	/// Writes a single byte to the address on the device
	#[inline]
	fn put_u8(&mut self, address: usize, data: u8) {
		self.write(address, data.to_ne_bytes().as_slice());
	}

	/// Retrieves a little endian 16-bit unsigned value from the address on the device
	#[inline]
	fn get_u16_le(&self, address: usize) -> u16 {
		u16::from_le_bytes([self.get_u8(address), self.get_u8(address + 1)])
	}

	/// Writes a little endian 16-bit unsigned value to the address on the device
	#[inline]
	fn put_u16_le(&mut self, address: usize, data: u16) {
		self.write(address, data.to_le_bytes().as_slice());
	}
}

/// A 64K memory snapshot; every address wraps at the 64K boundary
#[derive(Clone, Debug, PartialEq)]
pub struct Memory {
	ram: Vec<u8>,
}

impl Memory {
	/// Creates zero-filled memory
	pub fn new() -> Memory {
		Memory {
			ram: vec![0; MEMORY_SIZE],
		}
	}

	/// Creates memory with `data` loaded at `origin`
	pub fn from_bytes(origin: usize, data: &[u8]) -> Memory {
		let mut memory = Memory::new();
		memory.write(origin, data);
		memory
	}

	/// Borrows the whole address space
	pub fn as_slice(&self) -> &[u8] {
		&self.ram
	}
}

impl Default for Memory {
	fn default() -> Self {
		Memory::new()
	}
}

impl Device for Memory {
	fn read(&self, address: usize, length: usize) -> Vec<u8> {
		(0..length).map(|i| self.ram[(address + i) % MEMORY_SIZE]).collect()
	}

	fn write(&mut self, address: usize, data: &[u8]) {
		data.iter().enumerate().for_each(|(i, b)| {
			self.ram[(address + i) % MEMORY_SIZE] = *b;
		});
	}
}

impl Display for Memory {
	/// Writes the RAM as a 16-column hexdump with ASCII view
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		for i in (0..self.ram.len()).step_by(16) {
			write!(f, "{:04X}:\t", i)?;

			for x in 0..16 {
				write!(f, " {:02X}", self.ram[i + x])?;
			}
			write!(f, "\t")?;

			for x in 0..16 {
				let c = self.ram[i + x];

				match c {
					32..=126 => write!(f, "{}", c as char)?,
					_ => write!(f, ".")?,
				}
			}
			writeln!(f)?;
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_memory_wraps() {
		let mut memory = Memory::new();
		memory.write(65535, &[1, 2, 3]);

		assert_eq!(memory.get_u8(65535), 1);
		assert_eq!(memory.get_u8(0), 2);
		assert_eq!(memory.get_u8(65536 + 1), 3);
		assert_eq!(memory.get_u16_le(65535), 0x0201);
		assert_eq!(memory.read(65534, 4), vec![0, 1, 2, 3]);
	}

	#[test]
	fn test_memory_words() {
		let mut memory = Memory::from_bytes(32768, &[0xFF]);
		memory.put_u16_le(40000, 0x1234);

		assert_eq!(memory.get_i8(32768), -1);
		assert_eq!(memory.read(40000, 2), vec![0x34, 0x12]);
		assert_eq!(memory.as_slice().len(), MEMORY_SIZE);
	}

	#[test]
	fn test_memory_hexdump() {
		let memory = Memory::from_bytes(0, b"Hello");
		let dump = memory.to_string();
		let first = dump.lines().next().unwrap_or_default();

		assert!(first.starts_with("0000:\t 48 65 6C 6C 6F 00"));
		assert!(first.ends_with("\tHello..........."));
		assert_eq!(dump.lines().count(), MEMORY_SIZE / 16);
	}
}
