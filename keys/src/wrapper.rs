//! Removal of the X.509 SubjectPublicKeyInfo wrapper from RSA public keys.
//!
//! ```asn1
//! SubjectPublicKeyInfo  ::=  SEQUENCE  {
//!     algorithm            AlgorithmIdentifier,
//!     subjectPublicKey     BIT STRING
//! }
//! ```
//!
//! Providers that export a public key in this form prepend the wrapper to
//! the bare PKCS#1 structure; an importer that expects only the raw
//! modulus/exponent sequence needs it removed again.

use nom::{IResult, Parser};

const SEQUENCE_TAG: u8 = 0x30;
const INTEGER_TAG: u8 = 0x02;
const BIT_STRING_TAG: u8 = 0x03;
const LONG_FORM_MARKER: u8 = 0x80;

/// Fixed size of the rsaEncryption AlgorithmIdentifier encoding:
/// SEQUENCE header (2) + OBJECT IDENTIFIER (11) + NULL parameters (2).
const RSA_ALGORITHM_IDENTIFIER_LEN: usize = 15;

/// Strips the SubjectPublicKeyInfo wrapper from `data`, returning the bare
/// PKCS#1 key bytes.
///
/// The walk is best-effort: whenever `data` does not have the expected shape
/// (already a bare key, truncated, or not DER at all) the input is returned
/// unchanged, so callers cannot tell "already bare" apart from
/// "unparseable". A bare PKCS#1 key is recognized by the INTEGER opening its
/// outer SEQUENCE and passes through untouched, which makes a second pass
/// over stripped output a no-op.
///
/// The AlgorithmIdentifier is skipped with a fixed offset that only holds
/// for the rsaEncryption encoding. Supporting other key algorithms would
/// take a length-prefixed skip over the nested SEQUENCE instead.
pub fn strip_public_key_wrapper(data: &[u8]) -> &[u8] {
    match subject_public_key(data) {
        Ok((key, ())) => key,
        Err(_) => data,
    }
}

fn subject_public_key(input: &[u8]) -> IResult<&[u8], ()> {
    let (input, tag) = nom::number::be_u8().parse(input)?;
    if tag != SEQUENCE_TAG {
        return abort(input);
    }
    let (input, ()) = skip_length(input)?;

    let (_, tag) = nom::combinator::peek(nom::number::be_u8()).parse(input)?;
    // A bare PKCS#1 key opens its outer SEQUENCE with the modulus INTEGER.
    if tag == INTEGER_TAG {
        return abort(input);
    }
    // A wrapped key nests the AlgorithmIdentifier SEQUENCE here.
    if tag != SEQUENCE_TAG {
        return abort(input);
    }
    let (input, _) = nom::bytes::complete::take(RSA_ALGORITHM_IDENTIFIER_LEN).parse(input)?;

    let (input, tag) = nom::number::be_u8().parse(input)?;
    if tag != BIT_STRING_TAG {
        return abort(input);
    }
    let (input, ()) = skip_length(input)?;

    let (input, unused_bits) = nom::number::be_u8().parse(input)?;
    if unused_bits != 0 {
        return abort(input);
    }

    Ok((input, ()))
}

fn skip_length(input: &[u8]) -> IResult<&[u8], ()> {
    let (input, n) = nom::number::be_u8().parse(input)?;
    if n > LONG_FORM_MARKER {
        // Long form: the low bits give the number of length bytes that
        // follow. Their value does not matter to the walk.
        let count = (n - LONG_FORM_MARKER) as usize;
        let (input, _) = nom::bytes::complete::take(count).parse(input)?;
        return Ok((input, ()));
    }
    Ok((input, ()))
}

fn abort<O>(input: &[u8]) -> IResult<&[u8], O> {
    Err(nom::Err::Error(nom::error::Error::new(
        input,
        nom::error::ErrorKind::Verify,
    )))
}
