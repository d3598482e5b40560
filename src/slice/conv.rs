// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;
use std::rc::Rc;
use super::Slice;

impl From<Vec<u8>> for Slice {
	fn from(data: Vec<u8>) -> Self {
		let data = data.into_boxed_slice();
		let len = data.len();
		Self {
			mem: Rc::new(RefCell::new(data)),
			off: 0,
			len,
		}
	}
}

impl From<Box<[u8]>> for Slice {
	fn from(data: Box<[u8]>) -> Self {
		data.into_vec().into()
	}
}

impl From<&[u8]> for Slice {
	fn from(data: &[u8]) -> Self {
		data.to_vec().into()
	}
}

impl<const N: usize> From<[u8; N]> for Slice {
	fn from(data: [u8; N]) -> Self {
		data.to_vec().into()
	}
}

impl<const N: usize> From<&[u8; N]> for Slice {
	fn from(data: &[u8; N]) -> Self {
		data.to_vec().into()
	}
}

impl From<&str> for Slice {
	fn from(data: &str) -> Self {
		data.as_bytes().into()
	}
}

impl From<String> for Slice {
	fn from(data: String) -> Self {
		data.into_bytes().into()
	}
}

impl FromIterator<u8> for Slice {
	fn from_iter<T: IntoIterator<Item = u8>>(iter: T) -> Self {
		iter.into_iter().collect::<Vec<_>>().into()
	}
}
