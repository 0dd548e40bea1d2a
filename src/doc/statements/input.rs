/*!
# `INPUT <variable>`

## Purpose
Read a number from standard input into the variable.

## Remarks
`INPUT` declares the variable if it is new. When the input is not a number
or has run out, the variable is set to 0 and the rest of that input line
is discarded, so the next `INPUT` reads from the following line.

## Example
```text
INPUT n
PRINT n * 2
```

*/
