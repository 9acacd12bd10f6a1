use super::{Sequence, TieredConfig, TieredVec};

impl<T, C> scale::Encode for TieredVec<T, C>
where
    T: scale::Encode,
    C: TieredConfig,
{
    fn encode_to<O: scale::Output>(&self, output: &mut O) {
        output.push(&scale::Compact(self.len() as u64));
        for elem in self {
            output.push(elem);
        }
    }
}

impl<T, C> scale::Decode for TieredVec<T, C>
where
    C: TieredConfig,
    T: scale::Decode,
{
    fn decode<I: scale::Input>(input: &mut I) -> Result<Self, scale::Error> {
        let len = <scale::Compact<u64> as scale::Decode>::decode(input)?.0;
        let mut vec = Self::new();
        for _ in 0..len {
            vec.push_back(<T as scale::Decode>::decode(input)?);
        }
        Ok(vec)
    }
}

impl<T> scale::Encode for Sequence<T>
where
    T: scale::Encode,
{
    fn encode_to<O: scale::Output>(&self, output: &mut O) {
        output.push(&scale::Compact(self.len() as u64));
        for elem in self.iter() {
            output.push(elem);
        }
    }
}

impl<T> scale::Decode for Sequence<T>
where
    T: scale::Decode,
{
    fn decode<I: scale::Input>(input: &mut I) -> Result<Self, scale::Error> {
        let len = <scale::Compact<u64> as scale::Decode>::decode(input)?.0;
        let mut seq = Self::new();
        for _ in 0..len {
            seq.push_back(<T as scale::Decode>::decode(input)?);
        }
        Ok(seq)
    }
}
