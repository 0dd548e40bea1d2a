/*!
# `LET <variable> = <expression>`

## Purpose
Assign a value to the variable.

## Remarks
The first `LET` for a name declares the variable. The word `LET` is
required.

## Example
```text
LET a = 10
PRINT a
LET a = a * 2
PRINT a
```

*/
